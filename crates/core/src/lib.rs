//! Domain logic shared by the store and HTTP layers.
//!
//! Nothing here performs I/O: pagination arithmetic, page-number parsing and
//! image-id extraction are plain functions so they can be tested in
//! isolation.

pub mod filter;
pub mod pagination;
pub mod types;
