//! Sway window manager adapters
//!
//! [`client::SwayIpcClient`] speaks i3-ipc over the compositor's Unix
//! socket; [`dry_run::DryRunWindowManager`] stands in for it when commands
//! should only be recorded.

pub mod client;
pub mod codec;
pub mod dry_run;
pub mod error;
