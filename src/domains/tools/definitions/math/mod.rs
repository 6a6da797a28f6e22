//! Arithmetic tools module.
//!
//! - `add`: `x + y`
//! - `multiply`: `x * y`
//! - `divide`: `x / y`
//!
//! All three share the same two-operand schema (see `common`).

pub mod add;
pub mod common;
pub mod divide;
pub mod multiply;

pub use add::AddTool;
pub use divide::DivideTool;
pub use multiply::MultiplyTool;
