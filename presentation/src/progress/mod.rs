//! Session progress display

pub mod reporter;
