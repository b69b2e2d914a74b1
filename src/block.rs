//! Comment block aggregation
//!
//! A [`Block`] owns an ordered list of directives, the tag they are written with and
//! the comment delimiters. It is configured once with the `with_*` builder methods,
//! applied in call order, and then rendered:
//!
//! ```text
//! /**                      <- opening delimiter
//! 	@brief Does X.       <- each directive, one indent level deeper
//! 	@param[in] x input
//! */                       <- closing delimiter
//! ```
//!
//! Body lines carry the emitter's indent unit, a tab unless configured otherwise.
//!
//! The block does not normalize anything between directives: inline directives
//! (written without a line break) run into whatever comes next.

use crate::directive::{Directive, DirectiveKind, Render};
use crate::emitter::{Emitter, TextEmitter};
use crate::error::Result;
use crate::settings::BlockSettings;
use crate::emitln;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Tag used when none is configured
pub const DEFAULT_TAG: &str = "@";

/// Opening and closing lines of a comment block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Delimiters {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters::new("/**", "*/")
    }
}

/// An ordered documentation comment block
///
/// Directive order is emission order. Deserializing a block appends directives
/// unconditionally, like [`Block::with_directives`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    tag: String,
    delimiters: Delimiters,
    directives: Vec<Directive>,
}

impl Block {
    /// Create an empty block with the default tag and delimiters
    pub fn new() -> Self {
        Block {
            tag: DEFAULT_TAG.to_string(),
            delimiters: Delimiters::default(),
            directives: Vec::new(),
        }
    }

    /// Create an empty block using the configured tag and delimiters
    pub fn from_settings(settings: &BlockSettings) -> Self {
        Self::new()
            .with_tag(&settings.tag)
            .with_delimiters(Delimiters::new(&settings.open, &settings.close))
    }

    /// Decode a block from its JSON description
    ///
    /// ```text
    /// {"tag": "\\", "directives": [{"brief": {"text": "Does X."}}]}
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the tag every directive is prefixed with
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Append a directive
    pub fn with_directive(mut self, directive: impl Into<Directive>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// Append every directive, keeping their order
    pub fn with_directives<I, D>(mut self, directives: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Directive>,
    {
        self.directives
            .extend(directives.into_iter().map(Into::into));
        self
    }

    /// Append a directive unless one of the same kind is already present.
    ///
    /// The first directive of a kind wins; later ones are dropped. Field values are
    /// not compared.
    pub fn with_directive_once(mut self, directive: impl Into<Directive>) -> Self {
        let directive = directive.into();
        let kind = directive.kind();
        if self.contains(kind) {
            debug!(%kind, "skipping duplicate directive");
        } else {
            self.directives.push(directive);
        }
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Whether a directive of `kind` is present
    pub fn contains(&self, kind: DirectiveKind) -> bool {
        self.directives.iter().any(|d| d.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Render the block into `out`.
    ///
    /// The body is indented one level relative to the delimiters. The indent
    /// adjustment is undone after the last directive, so directives must leave the
    /// depth as they found it.
    pub fn render(&self, out: &mut dyn Emitter) {
        debug!(
            tag = %self.tag,
            directives = self.directives.len(),
            "rendering block"
        );
        emitln!(out, "{}", self.delimiters.open);
        out.indent(1);
        for directive in &self.directives {
            trace!(kind = %directive.kind(), "rendering directive");
            directive.render(&self.tag, out);
        }
        out.indent(-1);
        emitln!(out, "{}", self.delimiters.close);
    }

    /// Render into a fresh [`TextEmitter`] and return the text
    pub fn render_to_string(&self, max_line_length: usize) -> String {
        let mut out = TextEmitter::new(max_line_length);
        self.render(&mut out);
        out.into_string()
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::{Brief, Callgraph, Par, Param, Warning};
    use crate::emitter::DEFAULT_MAX_LINE_LENGTH;

    /// Adjusts the indent without writing anything
    struct Dedent(isize);

    impl Render for Dedent {
        fn render(&self, _tag: &str, out: &mut dyn Emitter) {
            out.indent(self.0);
        }
    }

    #[test]
    fn test_new_block_defaults() {
        let block = Block::new();
        assert_eq!(block.tag(), "@");
        assert_eq!(block.delimiters(), &Delimiters::new("/**", "*/"));
        assert!(block.is_empty());
    }

    #[test]
    fn test_empty_block_renders_delimiters_only() {
        let block = Block::new();
        assert_eq!(block.render_to_string(DEFAULT_MAX_LINE_LENGTH), "/**\n*/\n");
    }

    #[test]
    fn test_with_directive_appends_in_order() {
        let block = Block::new()
            .with_directive(Brief::new("first"))
            .with_directive(Warning::new("second"));
        let kinds: Vec<_> = block.directives().iter().map(Directive::kind).collect();
        assert_eq!(kinds, vec![DirectiveKind::Brief, DirectiveKind::Warning]);
    }

    #[test]
    fn test_with_directive_keeps_duplicates() {
        let block = Block::new()
            .with_directive(Brief::new("A"))
            .with_directive(Brief::new("B"));
        assert_eq!(
            block.directives(),
            &[
                Directive::from(Brief::new("A")),
                Directive::from(Brief::new("B"))
            ]
        );
    }

    #[test]
    fn test_with_directive_once_first_wins() {
        let block = Block::new()
            .with_directive(Brief::new("A"))
            .with_directive_once(Brief::new("B"));
        assert_eq!(block.directives(), &[Directive::from(Brief::new("A"))]);
    }

    #[test]
    fn test_with_directive_once_adds_missing_kind() {
        let block = Block::new()
            .with_directive(Brief::new("A"))
            .with_directive_once(Callgraph);
        assert_eq!(block.len(), 2);
        assert!(block.contains(DirectiveKind::Callgraph));
    }

    #[test]
    fn test_with_directive_once_ignores_field_values() {
        let block = Block::new()
            .with_directive_once(Param::new("x", "first"))
            .with_directive_once(Param::new("y", "second"));
        assert_eq!(block.len(), 1);
    }

    #[test]
    fn test_with_tag_applies_to_every_directive() {
        let block = Block::new()
            .with_tag("\\")
            .with_directives([Brief::new("Does X."), Brief::new("Again.")]);
        assert_eq!(
            block.render_to_string(80),
            "/**\n\t\\brief Does X.\n\t\\brief Again.\n*/\n"
        );
    }

    #[test]
    fn test_custom_delimiters() {
        let block = Block::new()
            .with_delimiters(Delimiters::new("/*!", " */"))
            .with_directive(Brief::new("Qt style."));
        assert_eq!(
            block.render_to_string(80),
            "/*!\n\t@brief Qt style.\n */\n"
        );
    }

    #[test]
    fn test_render_restores_indent_depth() {
        let mut out = TextEmitter::new(80);
        out.indent(2);
        Block::new()
            .with_directive(Brief::new("nested"))
            .render(&mut out);
        assert_eq!(out.indent_depth(), 2);
        assert_eq!(out.as_str(), "\t\t/**\n\t\t\t@brief nested\n\t\t*/\n");
    }

    #[test]
    fn test_from_json() {
        let block = Block::from_json(
            r#"{"tag": "\\", "directives": [{"brief": {"text": "Does X."}}, {"callgraph": null}]}"#,
        )
        .unwrap();
        assert_eq!(block.tag(), "\\");
        assert_eq!(block.delimiters(), &Delimiters::default());
        assert_eq!(
            block.render_to_string(80),
            "/**\n\t\\brief Does X.\n\t\\callgraph\n*/\n"
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_directive() {
        let err = Block::from_json(r#"{"directives": [{"frobnicate": null}]}"#).unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }

    #[test]
    fn test_empty_paragraph_line_is_indented() {
        let block = Block::new().with_directive(Par {
            title: "T".into(),
            paragraph: String::new(),
        });
        assert_eq!(block.render_to_string(80), "/**\n\t@par T\n\t\n*/\n");
    }

    #[test]
    #[should_panic(expected = "unbalanced indentation")]
    fn test_dedent_past_block_body_is_fatal() {
        // The sequence `render` drives: open delimiter, body indent, directive.
        let mut out = TextEmitter::new(80);
        emitln!(&mut out, "{}", Delimiters::default().open);
        out.indent(1);
        Dedent(-2).render(DEFAULT_TAG, &mut out);
    }

    #[test]
    fn test_balanced_directive_inside_block_body() {
        let mut out = TextEmitter::new(80);
        out.indent(1);
        Dedent(1).render("@", &mut out);
        Dedent(-1).render("@", &mut out);
        Block::new()
            .with_directive(Brief::new("nested"))
            .render(&mut out);
        assert_eq!(out.indent_depth(), 1);
        assert_eq!(out.as_str(), "\t/**\n\t\t@brief nested\n\t*/\n");
    }
}
