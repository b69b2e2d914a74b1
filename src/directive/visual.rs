//! Visual enhancements
//!
//! Inline word styling, list items, code and raw-output blocks, diagrams, images
//! and formulas. Block directives write their opening command, their body and their
//! closing command; the body is written as-is, line by line.

use super::args::{optional, quoted, size, word};
use super::Render;
use crate::emitter::Emitter;
use crate::{emit, emitln};
use serde::{Deserialize, Serialize};

marker_directives! {
    Endcode => "endcode",
    Enddocbookonly => "enddocbookonly",
    Enddot => "enddot",
    Endhtmlonly => "endhtmlonly",
    Endlatexonly => "endlatexonly",
    Endmanonly => "endmanonly",
    Endmsc => "endmsc",
    Endrtfonly => "endrtfonly",
    Enduml => "enduml",
    Endverbatim => "endverbatim",
    Endxmlonly => "endxmlonly",
}

inline_marker_directives! {
    FBraceClose => "f}",
    FBraceOpen => "f{",
    FBracketClose => "f]",
    FBracketOpen => "f[",
    FDollar => "f$",
    FParenClose => "f)",
    FParenOpen => "f(",
    N => "n",
}

text_directives! { item:
    Arg => "arg",
    Li => "li",
}

/// Single-word styling commands, written inline
macro_rules! styled_word_directives {
    ($($name:ident => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The inline `", $keyword, "` command")]
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name {
                pub word: String,
            }

            impl $name {
                pub fn new(word: impl Into<String>) -> Self {
                    $name { word: word.into() }
                }
            }

            impl Render for $name {
                fn render(&self, tag: &str, out: &mut dyn Emitter) {
                    emit!(out, "{tag}{} {}", $keyword, word(&self.word));
                }
            }
        )*
    };
}

styled_word_directives! {
    A => "a",
    B => "b",
    C => "c",
    E => "e",
    Em => "em",
    P => "p",
}

/// Raw output blocks: opening command, verbatim body, closing command
macro_rules! raw_block_directives {
    ($($name:ident($end:ident) => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $keyword, "` block, closed by [`", stringify!($end), "`]")]
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name {
                pub body: String,
            }

            impl $name {
                pub fn new(body: impl Into<String>) -> Self {
                    $name { body: body.into() }
                }
            }

            impl Render for $name {
                fn render(&self, tag: &str, out: &mut dyn Emitter) {
                    emitln!(out, "{tag}{}", $keyword);
                    write_body(&self.body, out);
                    $end.render(tag, out);
                }
            }
        )*
    };
}

raw_block_directives! {
    Docbookonly(Enddocbookonly) => "docbookonly",
    Htmlonly(Endhtmlonly) => "htmlonly",
    Latexonly(Endlatexonly) => "latexonly",
    Manonly(Endmanonly) => "manonly",
    Rtfonly(Endrtfonly) => "rtfonly",
    Verbatim(Endverbatim) => "verbatim",
    Xmlonly(Endxmlonly) => "xmlonly",
}

/// Inline diagram blocks taking an optional caption and size
macro_rules! diagram_directives {
    ($($name:ident($end:ident) => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $keyword, "` diagram, closed by [`", stringify!($end), "`]")]
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name {
                #[serde(default)]
                pub caption: String,
                #[serde(default)]
                pub size_indication: String,
                #[serde(default)]
                pub size: String,
                pub body: String,
            }

            impl Render for $name {
                fn render(&self, tag: &str, out: &mut dyn Emitter) {
                    emitln!(
                        out,
                        "{tag}{}{}{}",
                        $keyword,
                        quoted(&self.caption),
                        size(&self.size_indication, &self.size)
                    );
                    write_body(&self.body, out);
                    $end.render(tag, out);
                }
            }
        )*
    };
}

diagram_directives! {
    Dot(Enddot) => "dot",
    Msc(Endmsc) => "msc",
    Startuml(Enduml) => "startuml",
}

/// Diagram file commands: `<file> ["caption"] [<sizeindication>=<size>]`
macro_rules! diagram_file_directives {
    ($($name:ident => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $keyword, "` command")]
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name {
                pub file: String,
                #[serde(default)]
                pub caption: String,
                #[serde(default)]
                pub size_indication: String,
                #[serde(default)]
                pub size: String,
            }

            impl Render for $name {
                fn render(&self, tag: &str, out: &mut dyn Emitter) {
                    emitln!(
                        out,
                        "{tag}{} {}{}{}",
                        $keyword,
                        word(&self.file),
                        quoted(&self.caption),
                        size(&self.size_indication, &self.size)
                    );
                }
            }
        )*
    };
}

diagram_file_directives! {
    Diafile => "diafile",
    Dotfile => "dotfile",
    Mscfile => "mscfile",
}

fn write_body(body: &str, out: &mut dyn Emitter) {
    if !body.is_empty() {
        emitln!(out, "{body}");
    }
}

/// The `code` block
///
/// `language` selects syntax highlighting by file extension (`py`, `.cpp`); it is
/// written as `code{.py}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code {
    #[serde(default)]
    pub language: String,
    pub body: String,
}

impl Code {
    pub fn new(body: impl Into<String>) -> Self {
        Code {
            language: String::new(),
            body: body.into(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl Render for Code {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        let language = word(&self.language);
        if language.is_empty() {
            emitln!(out, "{tag}code");
        } else if language.starts_with('.') {
            emitln!(out, "{tag}code{{{language}}}");
        } else {
            emitln!(out, "{tag}code{{.{language}}}");
        }
        write_body(&self.body, out);
        Endcode.render(tag, out);
    }
}

/// The inline `emoji` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emoji {
    pub name: String,
}

impl Render for Emoji {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emit!(out, "{tag}emoji {}", word(&self.name));
    }
}

/// An inline formula, `f$ ... f$`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Formula {
    pub formula: String,
}

impl Render for Formula {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        FDollar.render(tag, out);
        emit!(out, "{}", self.formula);
        FDollar.render(tag, out);
    }
}

/// A displayed formula on its own lines, `f[ ... f]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormulaBlock {
    pub formula: String,
}

impl Render for FormulaBlock {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        FBracketOpen.render(tag, out);
        emitln!(out);
        write_body(&self.formula, out);
        FBracketClose.render(tag, out);
        emitln!(out);
    }
}

/// The `image` command
///
/// `format` is the output format the image applies to (`html`, `latex`, `docbook`,
/// `rtf`, `xml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    pub format: String,
    pub file: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub size_indication: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub inline: bool,
}

impl Render for Image {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        let inline = if self.inline { "{inline}" } else { "" };
        emitln!(
            out,
            "{tag}image{inline} {} {}{}{}",
            word(&self.format),
            word(&self.file),
            quoted(&self.caption),
            size(&self.size_indication, &self.size)
        );
    }
}

/// The `vhdlflow` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vhdlflow {
    #[serde(default)]
    pub title: String,
}

impl Render for Vhdlflow {
    fn render(&self, tag: &str, out: &mut dyn Emitter) {
        emitln!(out, "{tag}vhdlflow{}", optional(&self.title));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::TextEmitter;
    use rstest::rstest;

    fn render(directive: &dyn Render) -> String {
        let mut out = TextEmitter::default();
        directive.render("@", &mut out);
        out.into_string()
    }

    #[rstest]
    #[case(&A::new("x"), "@a x")]
    #[case(&B::new("bold"), "@b bold")]
    #[case(&C::new("code"), "@c code")]
    #[case(&E::new("x"), "@e x")]
    #[case(&Em::new("x"), "@em x")]
    #[case(&P::new("arg"), "@p arg")]
    fn test_styled_words_are_inline(#[case] directive: &dyn Render, #[case] expected: &str) {
        assert_eq!(render(directive), expected);
    }

    #[rstest]
    #[case("", "@code\nint x;\n@endcode\n")]
    #[case("cpp", "@code{.cpp}\nint x;\n@endcode\n")]
    #[case(".cpp", "@code{.cpp}\nint x;\n@endcode\n")]
    fn test_code_language(#[case] language: &str, #[case] expected: &str) {
        let code = Code::new("int x;").with_language(language);
        assert_eq!(render(&code), expected);
    }

    #[test]
    fn test_code_body_lines_follow_indent() {
        let mut out = TextEmitter::default();
        out.indent(1);
        Code::new("if (x) {\n    y();\n}").render("@", &mut out);
        assert_eq!(
            out.as_str(),
            "\t@code\n\tif (x) {\n\t    y();\n\t}\n\t@endcode\n"
        );
    }

    #[test]
    fn test_raw_block() {
        assert_eq!(
            render(&Htmlonly::new("<br/>")),
            "@htmlonly\n<br/>\n@endhtmlonly\n"
        );
        assert_eq!(render(&Verbatim::default()), "@verbatim\n@endverbatim\n");
    }

    #[test]
    fn test_dot_with_caption_and_size() {
        let dot = Dot {
            caption: "Graph".into(),
            size_indication: "width".into(),
            size: "5cm".into(),
            body: "digraph { a -> b }".into(),
        };
        assert_eq!(
            render(&dot),
            "@dot \"Graph\" width=5cm\ndigraph { a -> b }\n@enddot\n"
        );
    }

    #[test]
    fn test_diafile() {
        let diafile = Diafile {
            file: "flow.dia".into(),
            caption: "Flow".into(),
            size_indication: "height".into(),
            size: String::new(),
        };
        assert_eq!(render(&diafile), "@diafile flow.dia \"Flow\"\n");
    }

    #[test]
    fn test_image() {
        let image = Image {
            format: "html".into(),
            file: "logo.png".into(),
            caption: "Logo".into(),
            inline: true,
            ..Default::default()
        };
        assert_eq!(render(&image), "@image{inline} html logo.png \"Logo\"\n");
    }

    #[test]
    fn test_formulas() {
        let inline = Formula {
            formula: "x^2".into(),
        };
        assert_eq!(render(&inline), "@f$x^2@f$");

        let block = FormulaBlock {
            formula: "E = mc^2".into(),
        };
        assert_eq!(render(&block), "@f[\nE = mc^2\n@f]\n");
    }

    #[test]
    fn test_list_item() {
        assert_eq!(render(&Li::new("first")), "@li first\n");
        assert_eq!(render(&Arg::new("second")), "@arg second\n");
    }
}
