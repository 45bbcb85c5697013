// ABOUTME: Request and response shapes for the image inventory.
// ABOUTME: Field names serialize in the PascalCase form callers expect.

use super::repo_tag::name_and_tag;
use crate::runtime::{PruneReport, RawImage, RemovalEffect};
use crate::types::ImageId;
use serde::{Deserialize, Serialize};

/// List images, optionally including intermediate layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageList {
    #[serde(default)]
    pub all: bool,
}

/// Remove one image by id or reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageRemove {
    pub id: ImageId,
    #[serde(default)]
    pub force: bool,
}

/// Prune unused images. Without `all`, only dangling images are pruned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImagesPrune {
    #[serde(default)]
    pub all: bool,
}

/// Normalized view of one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    pub id: ImageId,
    pub name: String,
    pub tag: String,
    pub size: i64,
    pub created: i64,
}

impl From<RawImage> for Image {
    fn from(raw: RawImage) -> Self {
        let (name, tag) = name_and_tag(&raw.repo_tags);
        Self {
            id: ImageId::new(raw.id),
            name,
            tag,
            size: raw.size,
            created: raw.created,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageListResponse {
    pub items: Vec<Image>,
}

impl ImageListResponse {
    /// Normalize raw records and order them by name.
    ///
    /// The sort is stable, so images sharing a name keep engine order.
    pub fn from_raw(raw: Vec<RawImage>) -> Self {
        let mut items: Vec<Image> = raw.into_iter().map(Image::from).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Self { items }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PruneDeletedItem {
    pub deleted: String,
    pub untagged: String,
}

impl From<RemovalEffect> for PruneDeletedItem {
    fn from(effect: RemovalEffect) -> Self {
        Self {
            deleted: effect.deleted.unwrap_or_default(),
            untagged: effect.untagged.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImagesPruneResponse {
    pub images_deleted: Vec<PruneDeletedItem>,
    pub space_reclaimed: i64,
}

impl From<PruneReport> for ImagesPruneResponse {
    fn from(report: PruneReport) -> Self {
        Self {
            images_deleted: report
                .images_deleted
                .into_iter()
                .map(PruneDeletedItem::from)
                .collect(),
            space_reclaimed: report.space_reclaimed,
        }
    }
}
