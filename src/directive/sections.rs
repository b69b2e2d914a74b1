//! Section indicators
//!
//! Commands that start a documented section of the comment: descriptions,
//! parameters, return values, admonitions, conditional sections and the like.

use super::args::{lenient_direction, optional, quoted, word, Direction};
use super::Render;
use crate::emitter::Emitter;
use crate::emitln;
use serde::{Deserialize, Serialize};

marker_directives! {
    Else => "else",
    Endcond => "endcond",
    Endif => "endif",
    Endparblock => "endparblock",
}

text_directives! { text:
    Addindex => "addindex",
    Attention => "attention",
    Brief => "brief",
    Bug => "bug",
    Copyright => "copyright",
    Date => "date",
    Deprecated => "deprecated",
    Details => "details",
    Invariant => "invariant",
    Noop => "noop",
    Note => "note",
    Post => "post",
    Pre => "pre",
    Raisewarning => "raisewarning",
    Remark => "remark",
    Remarks => "remarks",
    ResultDescription => "result",
    Return => "return",
    Returns => "returns",
    Short => "short",
    Since => "since",
    Test => "test",
    Todo => "todo",
    Version => "version",
    Warning => "warning",
}

word_directives! { link_object:
    Copybrief => "copybrief",
    Copydetails => "copydetails",
    Copydoc => "copydoc",
}

word_directives! { section_label:
    Elseif => "elseif",
    If => "if",
    Ifnot => "ifnot",
}

/// The `cond` command. Without a label the section is always excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cond {
    #[serde(default)]
    pub section_label: String,
}

impl Render for Cond {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}cond{}", optional(&self.section_label));
    }
}

/// The `author` command, one line per author
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub authors: Vec<String>,
}

impl Render for Author {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        for author in &self.authors {
            emitln!(out, "{tag}author {author}");
        }
    }
}

/// The `authors` command, one line per author
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Authors {
    pub authors: Vec<String>,
}

impl Render for Authors {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        for author in &self.authors {
            emitln!(out, "{tag}authors {author}");
        }
    }
}

/// Shared shape of `exception`, `throw` and `throws`
macro_rules! exception_directives {
    ($($name:ident => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $keyword, "` command")]
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name {
                pub exception_object: String,
                pub description: String,
            }

            impl $name {
                pub fn new(object: impl Into<String>, description: impl Into<String>) -> Self {
                    $name {
                        exception_object: object.into(),
                        description: description.into(),
                    }
                }
            }

            impl Render for $name {
                fn render(&self, tag: &str, out: &mut dyn Emitter) {
                    emitln!(
                        out,
                        "{tag}{} {} {}",
                        $keyword,
                        word(&self.exception_object),
                        self.description
                    );
                }
            }
        )*
    };
}

exception_directives! {
    Exception => "exception",
    Throw => "throw",
    Throws => "throws",
}

/// The `param` command
///
/// Renders `<tag>param[<direction>] <name> <description>`; the bracket is left out
/// when no direction is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param {
    #[serde(
        default,
        deserialize_with = "lenient_direction",
        skip_serializing_if = "Option::is_none"
    )]
    pub direction: Option<Direction>,
    pub name: String,
    pub description: String,
}

impl Param {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Param {
            direction: None,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }
}

impl Render for Param {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        match self.direction {
            Some(direction) => emitln!(
                out,
                "{tag}param[{direction}] {} {}",
                self.name,
                self.description
            ),
            None => emitln!(out, "{tag}param {} {}", self.name, self.description),
        }
    }
}

/// The `tparam` command, documenting a template parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tparam {
    pub name: String,
    pub description: String,
}

impl Render for Tparam {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}tparam {} {}", self.name, self.description);
    }
}

/// The `retval` command, documenting one specific return value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Retval {
    pub value: String,
    pub description: String,
}

impl Render for Retval {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}retval {} {}", word(&self.value), self.description);
    }
}

/// The `par` command: an optional title line followed by the paragraph
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Par {
    #[serde(default)]
    pub title: String,
    pub paragraph: String,
}

impl Render for Par {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}par{}", optional(&self.title));
        emitln!(out, "{}", self.paragraph);
    }
}

/// The `parblock` command
///
/// Paragraphs are written one indent level deeper than the surrounding block,
/// separated by blank lines, and closed with `endparblock`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parblock {
    pub paragraphs: Vec<String>,
}

impl Render for Parblock {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}parblock");
        out.indent(1);
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                emitln!(out);
            }
            emitln!(out, "{paragraph}");
        }
        out.indent(-1);
        Endparblock.render(tag, out);
    }
}

/// The `sa` command (see also), references separated by commas
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sa {
    pub references: Vec<String>,
}

impl Render for Sa {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}sa{}", optional(&self.references.join(", ")));
    }
}

/// The `see` command, an alias of `sa`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct See {
    pub references: Vec<String>,
}

impl Render for See {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}see{}", optional(&self.references.join(", ")));
    }
}

/// The `showdate` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Showdate {
    pub format: String,
    #[serde(default)]
    pub date_time: String,
}

impl Render for Showdate {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(
            out,
            "{tag}showdate \"{}\"{}",
            self.format,
            optional(&self.date_time)
        );
    }
}

/// The `xrefitem` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xrefitem {
    pub key: String,
    pub heading: String,
    pub list_title: String,
    pub text: String,
}

impl Render for Xrefitem {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(
            out,
            "{tag}xrefitem {}{}{}{}",
            word(&self.key),
            quoted(&self.heading),
            quoted(&self.list_title),
            optional(&self.text)
        );
    }
}
