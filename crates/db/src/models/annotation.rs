//! Annotation rows: one labelled bounding box linking an image to a category.

use imagefilter_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Bounding box in image pixel coordinates.
///
/// Stored as four `bbox_*` columns and serialized as a nested object.
#[derive(Debug, Clone, Copy, PartialEq, FromRow, Serialize)]
pub struct BoundingBox {
    #[sqlx(rename = "bbox_x")]
    pub x: f64,
    #[sqlx(rename = "bbox_y")]
    pub y: f64,
    #[sqlx(rename = "bbox_w")]
    pub w: f64,
    #[sqlx(rename = "bbox_h")]
    pub h: f64,
}

/// A row from the `annotations` table.
///
/// `image_id` and `category_id` reference other tables by value only; the
/// schema carries no foreign-key constraints.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: DbId,
    pub image_id: DbId,
    pub category_id: DbId,
    #[sqlx(flatten)]
    pub bbox: BoundingBox,
}
