use serde::{Deserialize, Serialize};

use crate::RecordId;

/// Gallery theme. Presentation attributes are carried as opaque strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub name: String,
    pub primary_color: String,
    #[serde(default)]
    pub background_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeCreate {
    pub name: String,
    pub primary_color: String,
    #[serde(default)]
    pub background_image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl Theme {
    pub fn from_create(id: RecordId, create: ThemeCreate) -> Self {
        Self {
            id,
            name: create.name,
            primary_color: create.primary_color,
            background_image: create.background_image,
        }
    }

    pub fn apply_patch(&mut self, patch: ThemePatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.primary_color {
            self.primary_color = v;
        }
        if let Some(v) = patch.background_image {
            self.background_image = v;
        }
    }
}
