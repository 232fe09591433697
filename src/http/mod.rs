//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned / propagated)
//!     → handlers.rs (route → dispatcher or artist search)
//!     → negotiate.rs + views.rs (HTML view or JSON for artists)
//!     → error.rs (ApiError → status code + text body)
//! ```

pub mod error;
pub mod handlers;
pub mod negotiate;
pub mod request;
pub mod server;
pub mod views;

pub use error::ApiError;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
pub use views::{ViewEngine, ViewError, ARTIST_SEARCH_VIEW, X_VIEW_NAME};
