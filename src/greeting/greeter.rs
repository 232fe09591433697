//! Greeting formatters.
//!
//! Greeters are total: they never inspect or reject the name they are given.

use super::GreetingKind;

/// A greeting strategy: maps a name to a greeting.
pub type Greeter = fn(&str) -> String;

/// `"Good Morning, <name>"`
pub fn formal(name: &str) -> String {
    format!("Good Morning, {}", name)
}

/// `"Hello! <name>"`
pub fn informal(name: &str) -> String {
    format!("Hello! {}", name)
}

/// The greeter implementing a given kind.
pub fn for_kind(kind: GreetingKind) -> Greeter {
    match kind {
        GreetingKind::Formal => formal,
        GreetingKind::Informal => informal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formal() {
        assert_eq!(formal("John"), "Good Morning, John");
    }

    #[test]
    fn test_informal() {
        assert_eq!(informal("John"), "Hello! John");
    }

    #[test]
    fn test_empty_name_is_not_validated() {
        assert_eq!(formal(""), "Good Morning, ");
        assert_eq!(informal(""), "Hello! ");
    }

    #[test]
    fn test_for_kind() {
        assert_eq!(for_kind(GreetingKind::Formal)("Ada"), "Good Morning, Ada");
        assert_eq!(for_kind(GreetingKind::Informal)("Ada"), "Hello! Ada");
    }
}
