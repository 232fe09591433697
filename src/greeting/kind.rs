//! Greeting kinds and their dispatch keys.

use std::fmt;

/// The closed set of greeting styles the service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GreetingKind {
    Formal,
    Informal,
}

impl GreetingKind {
    /// Every kind, in registration order.
    pub const ALL: [GreetingKind; 2] = [GreetingKind::Formal, GreetingKind::Informal];

    /// Dispatch key used to look this kind up in a [`GreeterRegistry`](super::GreeterRegistry).
    pub fn key(self) -> &'static str {
        match self {
            GreetingKind::Formal => "Formal",
            GreetingKind::Informal => "Informal",
        }
    }
}

impl fmt::Display for GreetingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(GreetingKind::Formal.key(), "Formal");
        assert_eq!(GreetingKind::Informal.key(), "Informal");
        assert_eq!(GreetingKind::Informal.to_string(), "Informal");
    }
}
