//! Greeting dispatch: resolve a greeter by key and apply it.

use std::sync::Arc;

use thiserror::Error;

use super::GreeterRegistry;

/// Dispatch failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("No HelloService implementation was found")]
    NoServiceFound { key: String },
}

/// Looks up greeters in a shared registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<GreeterRegistry>,
}

impl Dispatcher {
    pub fn new(registry: GreeterRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Greet `name` with the greeter registered under `key`.
    pub fn dispatch(&self, key: &str, name: &str) -> Result<String, DispatchError> {
        let greeter = self.registry.lookup(key).ok_or_else(|| {
            tracing::debug!(key = %key, "No greeter registered");
            DispatchError::NoServiceFound {
                key: key.to_string(),
            }
        })?;

        Ok(greeter(name))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(GreeterRegistry::default())
    }
}
