//! Greeting subsystem.
//!
//! # Data Flow
//! ```text
//! route handler
//!     → dispatcher.rs (key + name)
//!     → registry.rs (exact, case-sensitive key lookup)
//!     → greeter.rs (Formal / Informal formatter)
//!     → greeting string, or DispatchError::NoServiceFound
//! ```
//!
//! # Design Decisions
//! - The set of greeting kinds is closed at compile time
//! - Greeters are plain function pointers with no state
//! - The registry is built once and never mutated

pub mod dispatcher;
pub mod greeter;
pub mod kind;
pub mod registry;

pub use dispatcher::{DispatchError, Dispatcher};
pub use greeter::Greeter;
pub use kind::GreetingKind;
pub use registry::GreeterRegistry;
