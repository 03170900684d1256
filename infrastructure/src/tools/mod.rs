//! Tool schema conversion for the model API

pub mod schema;

pub use schema::JsonSchemaToolConverter;
