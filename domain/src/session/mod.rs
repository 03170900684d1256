//! Agent session domain.
//!
//! - [`state::SessionState`] — per-invocation protocol state and scratchpad
//! - [`response::LlmResponse`] — a structured model response

pub mod response;
pub mod state;
