//! Utility functions and types.

use std::fmt::Debug;

/// Redact hides secrets when they are formatted with `{:?}`.
///
/// Values shorter than 12 chars are fully masked, longer ones keep their
/// first and last three chars so different keys can still be told apart.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chars = self.0.chars().count();
        if chars == 0 {
            return f.write_str("EMPTY");
        }
        if chars < 12 {
            return f.write_str("***");
        }

        // Slice on char boundaries, secrets are not guaranteed to be ASCII.
        let head: String = self.0.chars().take(3).collect();
        let tail: String = self.0.chars().skip(chars - 3).collect();
        write!(f, "{head}***{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Short", "***"; "short")]
    #[test_case("Hello World!", "Hel***ld!"; "exactly twelve")]
    #[test_case("07b19f21626f4d238e7ac81da32f5f17", "07b***f17"; "consumer secret")]
    #[test_case("", "EMPTY"; "empty")]
    #[test_case("HelloWorld", "***"; "ten chars")]
    #[test_case("ключ-секрет-123", "клю***123"; "non ascii")]
    fn test_redact(input: &str, expected: &str) {
        assert_eq!(format!("{:?}", Redact::from(input)), expected);
    }

    #[test]
    fn test_redact_option() {
        let none: Option<String> = None;
        assert_eq!(format!("{:?}", Redact::from(&none)), "EMPTY");
    }
}
