//! Request bodies and their validation into store drafts and patches.
//!
//! Fields are decoded loosely (everything optional, `price` as raw JSON) so
//! that missing or mistyped values reach the validators and produce the
//! resource's own error contract instead of a generic decode failure.

use serde::Deserialize;
use serde_json::Value;
use tally_core::validate::{self, optional};
use tally_core::{AssetPatch, NewAsset, NewTask, TaskPatch, ValidationError};

// === Asset Types ===

/// Body of `POST /api/assets`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateAssetRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl CreateAssetRequest {
    pub fn into_draft(self) -> Result<NewAsset, ValidationError> {
        Ok(NewAsset {
            name: validate::required_text("name", self.name)?,
            price: validate::required_number("price", self.price)?,
            slug: validate::required_text("slug", self.slug)?,
            image: validate::required_url("image", self.image)?,
        })
    }
}

/// Body of `PATCH /api/assets/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAssetRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl UpdateAssetRequest {
    pub fn into_patch(self) -> Result<AssetPatch, ValidationError> {
        Ok(AssetPatch {
            name: optional(self.name, |v| validate::text("name", v))?,
            price: optional(self.price, |v| validate::number("price", v))?,
            slug: optional(self.slug, |v| validate::text("slug", v))?,
            image: optional(self.image, |v| validate::url("image", v))?,
        })
    }
}

// === Task Types ===

/// Body of `POST /api/tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl CreateTaskRequest {
    pub fn into_draft(self) -> Result<NewTask, ValidationError> {
        Ok(NewTask {
            title: validate::required_text("title", self.title)?,
            description: validate::required_text("description", self.description)?,
            completed: self.completed.unwrap_or(false),
        })
    }
}

/// Body of `PATCH /api/tasks/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    pub fn into_patch(self) -> Result<TaskPatch, ValidationError> {
        Ok(TaskPatch {
            title: optional(self.title, |v| validate::text("title", v))?,
            description: optional(self.description, |v| validate::text("description", v))?,
            completed: self.completed,
        })
    }
}
