//! Artist record types.

use serde::{Deserialize, Serialize};

/// A single artist entry as displayed in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Artist {
    pub name: String,
    pub banner_image_uri: String,
}

impl Artist {
    pub fn new(name: impl Into<String>, banner_image_uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            banner_image_uri: banner_image_uri.into(),
        }
    }
}

/// View model for the artist search page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArtistSearchModel {
    pub artists: Vec<Artist>,
}
