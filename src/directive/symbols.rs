//! Escaped special characters, written inline
//!
//! Each symbol is the tag followed by the character it protects, e.g. `\@` or `\::`.

use super::Render;
use crate::emit;
use crate::emitter::Emitter;
use serde::{Deserialize, Serialize};

inline_marker_directives! {
    Ampersand => "&",
    At => "@",
    Backslash => "\\",
    Dollar => "$",
    DoubleColon => "::",
    Equals => "=",
    GreaterThan => ">",
    Hashtag => "#",
    LessThan => "<",
    MDash => "---",
    NDash => "--",
    Percent => "%",
    Period => ".",
    Pipe => "|",
    Quote => "\"",
}

/// The `~` command, optionally scoped to one output language (`~english`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tilde {
    #[serde(default)]
    pub language_id: String,
}

impl Render for Tilde {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emit!(out, "{tag}~{}", self.language_id);
    }
}
