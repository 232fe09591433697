//! Greeting demo service library.
//!
//! Three fixed route groups over axum: a static greeting, a keyed greeting
//! dispatcher with formal and informal greeters, and a static artist lookup
//! rendered as HTML or JSON.

// Domain
pub mod artists;
pub mod greeting;

// Core subsystems
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
