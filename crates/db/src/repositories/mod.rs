//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod annotation_repo;
pub mod category_repo;
pub mod image_repo;

pub use annotation_repo::AnnotationRepo;
pub use category_repo::CategoryRepo;
pub use image_repo::ImageRepo;
