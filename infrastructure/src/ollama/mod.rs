//! Ollama adapter
//!
//! Talks to a local Ollama server over HTTP using native tool calling on the
//! `/api/chat` endpoint.

pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
