//! Links, references and page sections

use super::args::{optional, quoted, word};
use super::Render;
use crate::emitter::Emitter;
use crate::{emit, emitln};
use serde::{Deserialize, Serialize};

marker_directives! {
    Endsecreflist => "endsecreflist",
    Secreflist => "secreflist",
    Tableofcontents => "tableofcontents",
}

inline_marker_directives! {
    Endlink => "endlink",
}

word_directives! { name:
    Anchor => "anchor",
    Refitem => "refitem",
}

word_directives! { label:
    Cite => "cite",
}

/// Page sectioning commands sharing the `<name> (title)` shape
macro_rules! heading_directives {
    ($($name:ident => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $keyword, "` command")]
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name {
                pub name: String,
                #[serde(default)]
                pub title: String,
            }

            impl $name {
                pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
                    $name {
                        name: name.into(),
                        title: title.into(),
                    }
                }
            }

            impl Render for $name {
                fn render(&self, tag: &str, out: &mut dyn Emitter) {
                    emitln!(
                        out,
                        "{tag}{} {}{}",
                        $keyword,
                        word(&self.name),
                        optional(&self.title)
                    );
                }
            }
        )*
    };
}

heading_directives! {
    Paragraph => "paragraph",
    Section => "section",
    Subsection => "subsection",
    Subsubsection => "subsubsection",
}

/// The `link` command, written inline and closed with `endlink`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub link_object: String,
    #[serde(default)]
    pub text: String,
}

impl Render for Link {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emit!(
            out,
            "{tag}link {}{} ",
            word(&self.link_object),
            optional(&self.text)
        );
        Endlink.render(tag, out);
    }
}

/// The inline `ref` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ref {
    pub name: String,
    #[serde(default)]
    pub text: String,
}

impl Render for Ref {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emit!(out, "{tag}ref {}{}", word(&self.name), quoted(&self.text));
    }
}

/// The `subpage` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subpage {
    pub name: String,
    #[serde(default)]
    pub text: String,
}

impl Render for Subpage {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}subpage {}{}", word(&self.name), quoted(&self.text));
    }
}
