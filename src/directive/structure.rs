//! Structural indicators
//!
//! Commands that attach a comment block to an entity (`class`, `fn`, `file`, ...),
//! group entities (`defgroup`, `ingroup`, ...) or control how members are listed
//! (`private`, `callgraph`, ...).

use super::args::{optional, word};
use super::Render;
use crate::emitter::Emitter;
use crate::emitln;
use serde::{Deserialize, Serialize};

marker_directives! {
    Callergraph => "callergraph",
    Callgraph => "callgraph",
    Endinternal => "endinternal",
    Fileinfo => "fileinfo",
    Hidecallergraph => "hidecallergraph",
    Hidecallgraph => "hidecallgraph",
    Hideinitializer => "hideinitializer",
    Hiderefby => "hiderefby",
    Hiderefs => "hiderefs",
    Internal => "internal",
    Lineinfo => "lineinfo",
    Nosubgrouping => "nosubgrouping",
    Private => "private",
    Privatesection => "privatesection",
    Protected => "protected",
    Protectedsection => "protectedsection",
    Public => "public",
    Publicsection => "publicsection",
    Pure => "pure",
    Showinitializer => "showinitializer",
    Showrefby => "showrefby",
    Showrefs => "showrefs",
    Static => "static",
}

word_directives! { name:
    Concept => "concept",
    Def => "def",
    Enum => "enum",
    Extends => "extends",
    Idlexcept => "idlexcept",
    Implements => "implements",
    Memberof => "memberof",
    Namespace => "namespace",
    Package => "package",
    Related => "related",
    Relatedalso => "relatedalso",
    Relates => "relates",
    Relatesalso => "relatesalso",
}

text_directives! { declaration:
    Function => "fn",
    Property => "property",
    Typedef => "typedef",
    Var => "var",
}

/// Compound declarations sharing the `<name> [<header-file>] [<header-name>]` shape
macro_rules! compound_directives {
    ($($name:ident => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $keyword, "` command")]
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name {
                pub name: String,
                #[serde(default)]
                pub header_file: String,
                #[serde(default)]
                pub header_name: String,
            }

            impl $name {
                pub fn new(name: impl Into<String>) -> Self {
                    $name {
                        name: name.into(),
                        ..Default::default()
                    }
                }

                pub fn with_header(
                    mut self,
                    file: impl Into<String>,
                    name: impl Into<String>,
                ) -> Self {
                    self.header_file = file.into();
                    self.header_name = name.into();
                    self
                }
            }

            impl Render for $name {
                fn render(&self, tag: &str, out: &mut dyn Emitter) {
                    emitln!(
                        out,
                        "{tag}{} {}{}{}",
                        $keyword,
                        word(&self.name),
                        optional(&word(&self.header_file)),
                        optional(&word(&self.header_name))
                    );
                }
            }
        )*
    };
}

compound_directives! {
    Category => "category",
    Class => "class",
    Interface => "interface",
    Protocol => "protocol",
    Struct => "struct",
    Union => "union",
}

/// The `addtogroup` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Addtogroup {
    pub name: String,
    #[serde(default)]
    pub title: String,
}

impl Render for Addtogroup {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}addtogroup {}{}", word(&self.name), optional(&self.title));
    }
}

/// The `defgroup` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Defgroup {
    pub name: String,
    pub title: String,
}

impl Render for Defgroup {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}defgroup {}{}", word(&self.name), optional(&self.title));
    }
}

/// The `weakgroup` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weakgroup {
    pub name: String,
    #[serde(default)]
    pub title: String,
}

impl Render for Weakgroup {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}weakgroup {}{}", word(&self.name), optional(&self.title));
    }
}

/// The `ingroup` command, listing every group the entity belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingroup {
    pub groups: Vec<String>,
}

impl Render for Ingroup {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        let groups: Vec<_> = self.groups.iter().map(|g| word(g)).collect();
        emitln!(out, "{tag}ingroup{}", optional(&groups.join(" ")));
    }
}

/// The `dir` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dir {
    #[serde(default)]
    pub path: String,
}

impl Render for Dir {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}dir{}", optional(&word(&self.path)));
    }
}

/// The `file` command. An empty name documents the current file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct File {
    #[serde(default)]
    pub name: String,
}

impl Render for File {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}file{}", optional(&word(&self.name)));
    }
}

/// The `example` command, optionally with line numbers (`example{lineno}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Example {
    pub file: String,
    #[serde(default)]
    pub lineno: bool,
}

impl Render for Example {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        let lineno = if self.lineno { "{lineno}" } else { "" };
        emitln!(out, "{tag}example{lineno} {}", word(&self.file));
    }
}

/// The `headerfile` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Headerfile {
    pub file: String,
    #[serde(default)]
    pub name: String,
}

impl Render for Headerfile {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(
            out,
            "{tag}headerfile {}{}",
            word(&self.file),
            optional(&word(&self.name))
        );
    }
}

/// The `mainpage` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mainpage {
    #[serde(default)]
    pub title: String,
}

impl Render for Mainpage {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}mainpage{}", optional(&self.title));
    }
}

/// The `name` command, naming a member group
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub header: String,
}

impl Render for Name {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}name{}", optional(&self.header));
    }
}

/// The `overload` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Overload {
    #[serde(default)]
    pub declaration: String,
}

impl Render for Overload {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}overload{}", optional(&self.declaration));
    }
}

/// The `page` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    pub name: String,
    #[serde(default)]
    pub title: String,
}

impl Render for Page {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}page {}{}", word(&self.name), optional(&self.title));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::TextEmitter;

    fn render(directive: &dyn Render) -> String {
        let mut out = TextEmitter::default();
        directive.render("@", &mut out);
        out.into_string()
    }

    #[test]
    fn test_class_with_header() {
        let class = Class::new("Widget").with_header("widget.h", "ui/widget.h");
        assert_eq!(render(&class), "@class Widget widget.h ui/widget.h\n");
    }

    #[test]
    fn test_class_without_header() {
        assert_eq!(render(&Class::new("Widget")), "@class Widget\n");
    }

    #[test]
    fn test_category_uses_its_header_name() {
        let category = Category::new("NSString(Ext)").with_header("ext.h", "Ext/ext.h");
        assert_eq!(render(&category), "@category NSString(Ext) ext.h Ext/ext.h\n");
    }

    #[test]
    fn test_headerfile_emits_own_keyword() {
        let header = Headerfile {
            file: "test.h".into(),
            name: "test/test.h".into(),
        };
        assert_eq!(render(&header), "@headerfile test.h test/test.h\n");
    }

    #[test]
    fn test_function_declaration() {
        assert_eq!(
            render(&Function::new("int main(int argc, char **argv)")),
            "@fn int main(int argc, char **argv)\n"
        );
    }

    #[test]
    fn test_defgroup() {
        let group = Defgroup {
            name: "io".into(),
            title: "Input and output".into(),
        };
        assert_eq!(render(&group), "@defgroup io Input and output\n");
    }

    #[test]
    fn test_ingroup_lists_every_group() {
        let ingroup = Ingroup {
            groups: vec!["io".into(), "net".into()],
        };
        assert_eq!(render(&ingroup), "@ingroup io net\n");
    }

    #[test]
    fn test_file_without_name() {
        assert_eq!(render(&File::default()), "@file\n");
        assert_eq!(render(&File { name: "main.c".into() }), "@file main.c\n");
    }

    #[test]
    fn test_example_lineno() {
        let example = Example {
            file: "demo.cpp".into(),
            lineno: true,
        };
        assert_eq!(render(&example), "@example{lineno} demo.cpp\n");
    }

    #[test]
    fn test_markers() {
        assert_eq!(render(&Private), "@private\n");
        assert_eq!(render(&Hidecallgraph), "@hidecallgraph\n");
    }
}
