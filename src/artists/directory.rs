//! Artist lookup.

use super::{Artist, ArtistSearchModel};

/// Search seam for the artist route.
pub trait ArtistSearch: Send + Sync + std::fmt::Debug {
    /// Return the artists matching `artist_name`.
    fn search(&self, artist_name: &str) -> ArtistSearchModel;
}

/// Fixed two-entry directory.
#[derive(Debug, Clone)]
pub struct StaticArtistDirectory {
    artists: Vec<Artist>,
}

impl StaticArtistDirectory {
    pub fn new() -> Self {
        Self {
            artists: vec![
                Artist::new("Queen", "/img/queen.jpg"),
                Artist::new("Yes", "/img/yes.jpg"),
            ],
        }
    }
}

impl Default for StaticArtistDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtistSearch for StaticArtistDirectory {
    fn search(&self, artist_name: &str) -> ArtistSearchModel {
        tracing::debug!(artist_name = %artist_name, "Artist search (static directory)");
        ArtistSearchModel {
            artists: self.artists.clone(),
        }
    }
}
