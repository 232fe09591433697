//! Keyed greeter registry.
//!
//! # Design Decisions
//! - Keys are the exact string forms of [`GreetingKind`]
//! - Lookup is case-sensitive
//! - Contents are fixed at construction

use std::collections::HashMap;

use super::{greeter, Greeter, GreetingKind};

/// Read-only mapping from dispatch key to greeter.
#[derive(Debug, Clone)]
pub struct GreeterRegistry {
    greeters: HashMap<&'static str, Greeter>,
}

impl GreeterRegistry {
    /// Registry holding a greeter for each of the given kinds.
    pub fn with_kinds(kinds: &[GreetingKind]) -> Self {
        let greeters = kinds
            .iter()
            .map(|kind| (kind.key(), greeter::for_kind(*kind)))
            .collect();
        Self { greeters }
    }

    /// Registry with no greeters. Every lookup misses.
    pub fn empty() -> Self {
        Self::with_kinds(&[])
    }

    /// Find the greeter registered under `key`.
    pub fn lookup(&self, key: &str) -> Option<Greeter> {
        self.greeters.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.greeters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.greeters.is_empty()
    }
}

impl Default for GreeterRegistry {
    fn default() -> Self {
        Self::with_kinds(&GreetingKind::ALL)
    }
}
