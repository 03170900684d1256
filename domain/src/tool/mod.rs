//! Tool domain module
//!
//! Defines how the model sees and invokes tools: every tool is described by a
//! [`ToolDefinition`], invoked via a [`ToolCall`], and answered with exactly one
//! [`ToolResult`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (proposal)   │    │ (text back)  │
//! └──────┬───────┘    └──────────────┘    └──────────────┘
//!        │
//!        ├─ aliases: "describe" → "get_docstring"
//!        └─ tools:   "get_docstring" → ToolDefinition
//! ```
//!
//! # Tool Name Alias System
//!
//! Models frequently use the names they were told about in prose rather than
//! the registered ones (`describe` instead of `get_docstring`). [`ToolSpec`]
//! resolves aliases without an extra model round-trip:
//!
//! - [`ToolSpec::resolve_alias`] — resolves alias → canonical name (aliases only)
//! - [`ToolSpec::resolve`] — resolves any name (canonical or alias)

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
