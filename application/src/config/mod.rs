//! Application-level configuration.
//!
//! - [`SessionConfig`] — agent loop control (model, turn limit, policy, timeouts)

pub mod session_config;

pub use session_config::SessionConfig;
