use imagefilter_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `images` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: DbId,
    pub coco_url: String,
    pub flickr_url: String,
    pub height: i32,
    pub width: i32,
    pub file_name: String,
    pub date_captured: String,
}
