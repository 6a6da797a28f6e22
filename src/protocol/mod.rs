//! Wire contract of the tool protocol.
//!
//! Everything here is plain data shared by the server and the client; the
//! client depends on this module only, never on server internals.
//!
//! - `GET /tools` → `200`, `[ToolInfo, ...]` in registration order
//! - `POST /call` with [`CallRequest`] → `200` [`CallResponse`], or an error
//!   status with [`ErrorBody`] (404 unknown tool, 400 bad arguments, 500
//!   execution failure)

mod schema;
mod wire;

pub use schema::{InputSchema, PrimitiveType, PropertySchema, SchemaType};
pub(crate) use schema::integer_value;
pub use wire::{CALL_PATH, CallRequest, CallResponse, ErrorBody, ErrorKind, TOOLS_PATH, ToolInfo};
