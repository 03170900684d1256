//! Dispatch domain — rules of the describe/execute protocol
//!
//! ```text
//! ToolCall ──route──▶ Describe ──▶ grammar text            (marks Described)
//!                  ├─▶ Execute  ──▶ policy check ──▶ normalize ──▶ IPC
//!                  ├─▶ Stub     ──▶ redirect hint
//!                  └─▶ Unknown  ──▶ NotFound
//! ```
//!
//! Everything here is pure; the application layer's dispatch gateway binds
//! these rules to the window-manager port.

pub mod fault;
pub mod policy;
pub mod protocol;

pub use fault::DispatchFault;
pub use policy::DescribePolicy;
pub use protocol::{EXECUTE_CODE, GET_DOCSTRING, ToolRoute};
