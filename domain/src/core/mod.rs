//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — the language model driving a session
//! - [`error::CatalogError`] — catalog construction and lookup errors
//! - [`string`] — text helpers for previews and logs

pub mod error;
pub mod model;
pub mod string;
