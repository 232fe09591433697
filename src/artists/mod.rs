//! Artist search subsystem.
//!
//! # Responsibilities
//! - Define the artist display records handed to views
//! - Provide the search seam used by the `/searchArtist` route
//! - Ship the fixed in-memory directory
//!
//! # Design Decisions
//! - Search is a trait so routes can run against another directory in tests
//! - The static directory ignores the requested name and always returns the same list

pub mod directory;
pub mod types;

pub use directory::{ArtistSearch, StaticArtistDirectory};
pub use types::{Artist, ArtistSearchModel};
