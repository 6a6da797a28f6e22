//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently has a single domain, `tools`: the registry of
//! invocable tools and the dispatcher that runs them.

pub mod tools;
