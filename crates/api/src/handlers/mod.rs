pub mod categories;
pub mod images;
