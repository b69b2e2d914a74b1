//! Commands for displaying examples and included files

use super::args::word;
use super::Render;
use crate::emitter::Emitter;
use crate::emitln;
use serde::{Deserialize, Serialize};

word_directives! { file:
    Docbookinclude => "docbookinclude",
    Dontinclude => "dontinclude",
    Htmlinclude => "htmlinclude",
    Include => "include",
    Includedoc => "includedoc",
    Includelineno => "includelineno",
    Latexinclude => "latexinclude",
    Maninclude => "maninclude",
    Rtfinclude => "rtfinclude",
    Verbinclude => "verbinclude",
    Xmlinclude => "xmlinclude",
}

// Walk the file last opened with `dontinclude`.
text_directives! { pattern:
    Line => "line",
    Skip => "skip",
    Skipline => "skipline",
    Until => "until",
}

/// Snippet commands sharing the `<file> <block_id>` shape
macro_rules! snippet_directives {
    ($($name:ident => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $keyword, "` command")]
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name {
                pub file: String,
                pub block_id: String,
            }

            impl Render for $name {
                fn render(&self, tag: &str, out: &mut dyn Emitter) {
                    emitln!(out, "{tag}{} {} {}", $keyword, word(&self.file), self.block_id);
                }
            }
        )*
    };
}

snippet_directives! {
    Snippet => "snippet",
    Snippetdoc => "snippetdoc",
    Snippetlineno => "snippetlineno",
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
    fn test_dontinclude_walk() {
        let mut out = TextEmitter::default();
        Dontinclude::new("example_test.cpp").render("@", &mut out);
        Skip::new("main").render("@", &mut out);
        Until::new("{").render("@", &mut out);
        assert_eq!(
            out.as_str(),
            "@dontinclude example_test.cpp\n@skip main\n@until {\n"
        );
    }

    #[test]
    fn test_snippet() {
        let snippet = Snippet {
            file: "snippets/example.cpp".into(),
            block_id: "Adding a resource".into(),
        };
        assert_eq!(
            render(&snippet),
            "@snippet snippets/example.cpp Adding a resource\n"
        );
    }
}
