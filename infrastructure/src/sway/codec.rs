//! i3-ipc message framing.
//!
//! ```text
//! ┌──────────┬──────────────┬──────────────┬─────────────┐
//! │ "i3-ipc" │ length (u32) │ type (u32)   │ payload     │
//! └──────────┴──────────────┴──────────────┴─────────────┘
//! ```
//!
//! Integers use the host's native byte order.

use super::error::{Result, SwayIpcError};
use serde::Deserialize;

pub const MAGIC: &[u8; 6] = b"i3-ipc";
pub const HEADER_LEN: usize = 14;
pub const RUN_COMMAND: u32 = 0;
pub const MAX_PAYLOAD: usize = 16 * 1024 * 1024;

/// Frame a message.
pub fn encode(message_type: u32, payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > MAX_PAYLOAD {
        return Err(SwayIpcError::Protocol(format!(
            "payload of {} bytes exceeds the {} byte limit",
            payload.len(),
            MAX_PAYLOAD
        )));
    }

    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(MAGIC);
    frame.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
    frame.extend_from_slice(&message_type.to_ne_bytes());
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Parse a header into `(payload_len, message_type)`.
pub fn decode_header(header: &[u8; HEADER_LEN]) -> Result<(usize, u32)> {
    if header[..6] != MAGIC[..] {
        return Err(SwayIpcError::Protocol(format!(
            "bad magic {:?}",
            String::from_utf8_lossy(&header[..6])
        )));
    }

    let len = u32::from_ne_bytes([header[6], header[7], header[8], header[9]]) as usize;
    let message_type = u32::from_ne_bytes([header[10], header[11], header[12], header[13]]);
    if len > MAX_PAYLOAD {
        return Err(SwayIpcError::Protocol(format!(
            "reply of {} bytes exceeds the {} byte limit",
            len, MAX_PAYLOAD
        )));
    }
    Ok((len, message_type))
}

/// One entry of a RUN_COMMAND reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandOutcome {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub parse_error: bool,
}

/// Interpret a RUN_COMMAND reply: `Ok` when every entry succeeded,
/// otherwise the first failure's error string.
pub fn check_run_command_reply(payload: &[u8]) -> Result<()> {
    let outcomes: Vec<CommandOutcome> = serde_json::from_slice(payload)
        .map_err(|e| SwayIpcError::Protocol(format!("unexpected RUN_COMMAND reply: {}", e)))?;

    match outcomes.into_iter().find(|o| !o.success) {
        None => Ok(()),
        Some(failure) => Err(SwayIpcError::Rejected(
            failure
                .error
                .unwrap_or_else(|| "command failed without an error message".to_string()),
        )),
    }
}
