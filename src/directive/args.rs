//! Argument formatting shared by directive renderers

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Format a single-word argument.
///
/// The value is trimmed. A value that still contains whitespace is wrapped in
/// double quotes so Doxygen reads it as one argument.
pub fn word(s: &str) -> Cow<'_, str> {
    let trimmed = s.trim();
    if trimmed.contains(char::is_whitespace) {
        Cow::Owned(format!("\"{trimmed}\""))
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Format an optional trailing argument: empty stays empty, anything else gets a
/// leading space.
pub fn optional(s: &str) -> String {
    if s.is_empty() {
        String::new()
    } else {
        format!(" {s}")
    }
}

/// Format an optional trailing quoted argument (`"caption"`), with a leading space.
pub fn quoted(s: &str) -> String {
    if s.is_empty() {
        String::new()
    } else {
        format!(" \"{s}\"")
    }
}

/// Format an optional `<indication>=<size>` pair. Both parts must be present.
pub(crate) fn size(indication: &str, size: &str) -> String {
    if indication.is_empty() || size.is_empty() {
        String::new()
    } else {
        format!(" {indication}={size}")
    }
}

/// Data flow direction of a `param` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "out")]
    Out,
    #[serde(rename = "in,out")]
    InOut,
}

impl Direction {
    /// Parse one of `in`, `out` or `in,out`. Anything else is not a direction.
    pub fn parse(s: &str) -> Option<Direction> {
        match s {
            "in" => Some(Direction::In),
            "out" => Some(Direction::Out),
            "in,out" => Some(Direction::InOut),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
            Direction::InOut => "in,out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deserialize a direction leniently: unrecognized strings mean "no direction".
pub(crate) fn lenient_direction<'de, D>(deserializer: D) -> Result<Option<Direction>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Direction::parse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_trims() {
        assert_eq!(word("  name  "), "name");
    }

    #[test]
    fn test_word_quotes_inner_whitespace() {
        assert_eq!(word("my file.h"), "\"my file.h\"");
    }

    #[test]
    fn test_word_empty() {
        assert_eq!(word(""), "");
        assert_eq!(word("   "), "");
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional(""), "");
        assert_eq!(optional("x"), " x");
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted(""), "");
        assert_eq!(quoted("A caption"), " \"A caption\"");
    }

    #[test]
    fn test_size_requires_both_parts() {
        assert_eq!(size("width", "10cm"), " width=10cm");
        assert_eq!(size("width", ""), "");
        assert_eq!(size("", "10cm"), "");
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("in"), Some(Direction::In));
        assert_eq!(Direction::parse("out"), Some(Direction::Out));
        assert_eq!(Direction::parse("in,out"), Some(Direction::InOut));
        assert_eq!(Direction::parse("maybe"), None);
        assert_eq!(Direction::parse("IN"), None);
        assert_eq!(Direction::parse(""), None);
    }

    #[test]
    fn test_direction_display_round_trips() {
        for direction in [Direction::In, Direction::Out, Direction::InOut] {
            assert_eq!(Direction::parse(&direction.to_string()), Some(direction));
        }
    }
}
