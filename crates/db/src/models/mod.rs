//! Row structs for the dataset tables.
//!
//! Each struct derives `FromRow` for the store and `Serialize` for the wire.
//! JSON field names follow the source dataset's camelCase documents.

pub mod annotation;
pub mod category;
pub mod image;
