//! Documentation directives
//!
//! A [`Directive`] is one Doxygen command instance (`@brief`, `@param`, `@code`, ...).
//! Every directive renders itself through the [`Render`] capability, given the tag
//! prefix (`@` or `\`) and an [`Emitter`]. The block aggregator only ever sees that
//! capability and the directive's [`DirectiveKind`].
//!
//! Directives come in three shapes:
//!
//! - markers: no fields, a single fixed line such as `@callgraph` or `@endcode`
//! - inline: written with [`Emitter::print`] and no line break, such as `@b word`,
//!   formula delimiters and escaped symbols
//! - line: data-driven, terminated with a newline, such as `@param[in] x the input`
//!
//! A few directives wrap nested content (`@code`, `@verbatim`, `@parblock`, ...) and
//! emit their own closing command. Those that indent their content restore the
//! indent depth before returning.
//!
//! The directives are grouped by the sections of the Doxygen command reference:
//!
//! - [`structure`]: structural indicators (`class`, `file`, `defgroup`, ...)
//! - [`sections`]: section indicators (`brief`, `param`, `return`, `warning`, ...)
//! - [`links`]: links, references and page sections
//! - [`inclusion`]: commands displaying examples and included files
//! - [`visual`]: visual enhancements (styling, raw output blocks, diagrams, formulas)
//! - [`symbols`]: escaped special characters

pub mod args;

use crate::emitter::Emitter;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use args::{optional, quoted, word, Direction};

/// Capability shared by every directive: write yourself to `out` using `tag`.
pub trait Render {
    fn render(&self, tag: &str, out: &mut dyn Emitter);
}

// ============================================================================
// DIRECTIVE DEFINITION MACROS
// ============================================================================

/// Field-less directives written as a single `<tag><keyword>` line
macro_rules! marker_directives {
    ($($name:ident => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $keyword, "` command")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
            pub struct $name;

            impl $crate::directive::Render for $name {
                fn render(&self, tag: &str, out: &mut dyn $crate::emitter::Emitter) {
                    $crate::emitln!(out, "{tag}{}", $keyword);
                }
            }
        )*
    };
}

/// Field-less directives written inline as `<tag><keyword>` without a line break
macro_rules! inline_marker_directives {
    ($($name:ident => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The inline `", $keyword, "` command")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
            pub struct $name;

            impl $crate::directive::Render for $name {
                fn render(&self, tag: &str, out: &mut dyn $crate::emitter::Emitter) {
                    $crate::emit!(out, "{tag}{}", $keyword);
                }
            }
        )*
    };
}

/// Directives taking one free-text argument, written as `<tag><keyword> <text>`
macro_rules! text_directives {
    ($field:ident: $($name:ident => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $keyword, "` command")]
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
            pub struct $name {
                pub $field: String,
            }

            impl $name {
                pub fn new($field: impl Into<String>) -> Self {
                    $name { $field: $field.into() }
                }
            }

            impl $crate::directive::Render for $name {
                fn render(&self, tag: &str, out: &mut dyn $crate::emitter::Emitter) {
                    $crate::emitln!(out, "{tag}{} {}", $keyword, self.$field);
                }
            }
        )*
    };
}

/// Directives taking one single-word argument, written as `<tag><keyword> <word>`
macro_rules! word_directives {
    ($field:ident: $($name:ident => $keyword:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $keyword, "` command")]
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
            pub struct $name {
                pub $field: String,
            }

            impl $name {
                pub fn new($field: impl Into<String>) -> Self {
                    $name { $field: $field.into() }
                }
            }

            impl $crate::directive::Render for $name {
                fn render(&self, tag: &str, out: &mut dyn $crate::emitter::Emitter) {
                    $crate::emitln!(
                        out,
                        "{tag}{} {}",
                        $keyword,
                        $crate::directive::args::word(&self.$field)
                    );
                }
            }
        )*
    };
}

pub mod inclusion;
pub mod links;
pub mod sections;
pub mod structure;
pub mod symbols;
pub mod visual;

pub use inclusion::*;
pub use links::*;
pub use sections::*;
pub use structure::*;
pub use symbols::*;
pub use visual::*;

// ============================================================================
// DIRECTIVE REGISTRY
// ============================================================================

/// Generates [`Directive`], [`DirectiveKind`] and their dispatch from one table
macro_rules! directives {
    ($($variant:ident($ty:ty) => $keyword:literal),* $(,)?) => {
        /// One documentation command, ready to render
        ///
        /// Serialized externally tagged with snake_case names, e.g.
        /// `{"brief": {"text": "Does X."}}` or `{"callgraph": null}`.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Directive {
            $($variant($ty),)*
        }

        /// Discriminant of a [`Directive`], used for kind-based deduplication
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum DirectiveKind {
            $($variant,)*
        }

        impl DirectiveKind {
            /// Every kind, in declaration order
            pub const ALL: &'static [DirectiveKind] = &[$(DirectiveKind::$variant,)*];

            /// The command word written after the tag
            pub fn keyword(self) -> &'static str {
                match self {
                    $(DirectiveKind::$variant => $keyword,)*
                }
            }
        }

        impl Directive {
            pub fn kind(&self) -> DirectiveKind {
                match self {
                    $(Directive::$variant(_) => DirectiveKind::$variant,)*
                }
            }

            /// Build the field-default directive of `kind`
            pub fn default_for(kind: DirectiveKind) -> Directive {
                match kind {
                    $(DirectiveKind::$variant => Directive::$variant(<$ty>::default()),)*
                }
            }
        }

        impl Render for Directive {
            fn render(&self, tag: &str, out: &mut dyn Emitter) {
                match self {
                    $(Directive::$variant(directive) => directive.render(tag, out),)*
                }
            }
        }

        $(
            impl From<$ty> for Directive {
                fn from(directive: $ty) -> Self {
                    Directive::$variant(directive)
                }
            }
        )*
    };
}

directives! {
    // Structural indicators
    Addtogroup(Addtogroup) => "addtogroup",
    Callergraph(Callergraph) => "callergraph",
    Callgraph(Callgraph) => "callgraph",
    Category(Category) => "category",
    Class(Class) => "class",
    Concept(Concept) => "concept",
    Def(Def) => "def",
    Defgroup(Defgroup) => "defgroup",
    Dir(Dir) => "dir",
    Endinternal(Endinternal) => "endinternal",
    Enum(Enum) => "enum",
    Example(Example) => "example",
    Extends(Extends) => "extends",
    File(File) => "file",
    Fileinfo(Fileinfo) => "fileinfo",
    Fn(Function) => "fn",
    Headerfile(Headerfile) => "headerfile",
    Hidecallergraph(Hidecallergraph) => "hidecallergraph",
    Hidecallgraph(Hidecallgraph) => "hidecallgraph",
    Hideinitializer(Hideinitializer) => "hideinitializer",
    Hiderefby(Hiderefby) => "hiderefby",
    Hiderefs(Hiderefs) => "hiderefs",
    Idlexcept(Idlexcept) => "idlexcept",
    Implements(Implements) => "implements",
    Ingroup(Ingroup) => "ingroup",
    Interface(Interface) => "interface",
    Internal(Internal) => "internal",
    Lineinfo(Lineinfo) => "lineinfo",
    Mainpage(Mainpage) => "mainpage",
    Memberof(Memberof) => "memberof",
    Name(Name) => "name",
    Namespace(Namespace) => "namespace",
    Nosubgrouping(Nosubgrouping) => "nosubgrouping",
    Overload(Overload) => "overload",
    Package(Package) => "package",
    Page(Page) => "page",
    Private(Private) => "private",
    Privatesection(Privatesection) => "privatesection",
    Property(Property) => "property",
    Protected(Protected) => "protected",
    Protectedsection(Protectedsection) => "protectedsection",
    Protocol(Protocol) => "protocol",
    Public(Public) => "public",
    Publicsection(Publicsection) => "publicsection",
    Pure(Pure) => "pure",
    Related(Related) => "related",
    Relatedalso(Relatedalso) => "relatedalso",
    Relates(Relates) => "relates",
    Relatesalso(Relatesalso) => "relatesalso",
    Showinitializer(Showinitializer) => "showinitializer",
    Showrefby(Showrefby) => "showrefby",
    Showrefs(Showrefs) => "showrefs",
    Static(Static) => "static",
    Struct(Struct) => "struct",
    Typedef(Typedef) => "typedef",
    Union(Union) => "union",
    Var(Var) => "var",
    Weakgroup(Weakgroup) => "weakgroup",

    // Section indicators
    Addindex(Addindex) => "addindex",
    Attention(Attention) => "attention",
    Author(Author) => "author",
    Authors(Authors) => "authors",
    Brief(Brief) => "brief",
    Bug(Bug) => "bug",
    Cond(Cond) => "cond",
    Copybrief(Copybrief) => "copybrief",
    Copydetails(Copydetails) => "copydetails",
    Copydoc(Copydoc) => "copydoc",
    Copyright(Copyright) => "copyright",
    Date(Date) => "date",
    Deprecated(Deprecated) => "deprecated",
    Details(Details) => "details",
    Else(Else) => "else",
    Elseif(Elseif) => "elseif",
    Endcond(Endcond) => "endcond",
    Endif(Endif) => "endif",
    Endparblock(Endparblock) => "endparblock",
    Exception(Exception) => "exception",
    If(If) => "if",
    Ifnot(Ifnot) => "ifnot",
    Invariant(Invariant) => "invariant",
    Noop(Noop) => "noop",
    Note(Note) => "note",
    Par(Par) => "par",
    Param(Param) => "param",
    Parblock(Parblock) => "parblock",
    Post(Post) => "post",
    Pre(Pre) => "pre",
    Raisewarning(Raisewarning) => "raisewarning",
    Remark(Remark) => "remark",
    Remarks(Remarks) => "remarks",
    Result(ResultDescription) => "result",
    Return(Return) => "return",
    Returns(Returns) => "returns",
    Retval(Retval) => "retval",
    Sa(Sa) => "sa",
    See(See) => "see",
    Short(Short) => "short",
    Showdate(Showdate) => "showdate",
    Since(Since) => "since",
    Test(Test) => "test",
    Throw(Throw) => "throw",
    Throws(Throws) => "throws",
    Todo(Todo) => "todo",
    Tparam(Tparam) => "tparam",
    Version(Version) => "version",
    Warning(Warning) => "warning",
    Xrefitem(Xrefitem) => "xrefitem",

    // Links and references
    Anchor(Anchor) => "anchor",
    Cite(Cite) => "cite",
    Endlink(Endlink) => "endlink",
    Endsecreflist(Endsecreflist) => "endsecreflist",
    Link(Link) => "link",
    Paragraph(Paragraph) => "paragraph",
    Ref(Ref) => "ref",
    Refitem(Refitem) => "refitem",
    Secreflist(Secreflist) => "secreflist",
    Section(Section) => "section",
    Subpage(Subpage) => "subpage",
    Subsection(Subsection) => "subsection",
    Subsubsection(Subsubsection) => "subsubsection",
    Tableofcontents(Tableofcontents) => "tableofcontents",

    // Displaying examples
    Docbookinclude(Docbookinclude) => "docbookinclude",
    Dontinclude(Dontinclude) => "dontinclude",
    Htmlinclude(Htmlinclude) => "htmlinclude",
    Include(Include) => "include",
    Includedoc(Includedoc) => "includedoc",
    Includelineno(Includelineno) => "includelineno",
    Latexinclude(Latexinclude) => "latexinclude",
    Line(Line) => "line",
    Maninclude(Maninclude) => "maninclude",
    Rtfinclude(Rtfinclude) => "rtfinclude",
    Skip(Skip) => "skip",
    Skipline(Skipline) => "skipline",
    Snippet(Snippet) => "snippet",
    Snippetdoc(Snippetdoc) => "snippetdoc",
    Snippetlineno(Snippetlineno) => "snippetlineno",
    Until(Until) => "until",
    Verbinclude(Verbinclude) => "verbinclude",
    Xmlinclude(Xmlinclude) => "xmlinclude",

    // Visual enhancements
    A(A) => "a",
    Arg(Arg) => "arg",
    B(B) => "b",
    C(C) => "c",
    Code(Code) => "code",
    Diafile(Diafile) => "diafile",
    Docbookonly(Docbookonly) => "docbookonly",
    Dot(Dot) => "dot",
    Dotfile(Dotfile) => "dotfile",
    E(E) => "e",
    Em(Em) => "em",
    Emoji(Emoji) => "emoji",
    Endcode(Endcode) => "endcode",
    Enddocbookonly(Enddocbookonly) => "enddocbookonly",
    Enddot(Enddot) => "enddot",
    Endhtmlonly(Endhtmlonly) => "endhtmlonly",
    Endlatexonly(Endlatexonly) => "endlatexonly",
    Endmanonly(Endmanonly) => "endmanonly",
    Endmsc(Endmsc) => "endmsc",
    Endrtfonly(Endrtfonly) => "endrtfonly",
    Enduml(Enduml) => "enduml",
    Endverbatim(Endverbatim) => "endverbatim",
    Endxmlonly(Endxmlonly) => "endxmlonly",
    FBraceClose(FBraceClose) => "f}",
    FBraceOpen(FBraceOpen) => "f{",
    FBracketClose(FBracketClose) => "f]",
    FBracketOpen(FBracketOpen) => "f[",
    FDollar(FDollar) => "f$",
    FParenClose(FParenClose) => "f)",
    FParenOpen(FParenOpen) => "f(",
    Formula(Formula) => "f$",
    FormulaBlock(FormulaBlock) => "f[",
    Htmlonly(Htmlonly) => "htmlonly",
    Image(Image) => "image",
    Latexonly(Latexonly) => "latexonly",
    Li(Li) => "li",
    Manonly(Manonly) => "manonly",
    Msc(Msc) => "msc",
    Mscfile(Mscfile) => "mscfile",
    N(N) => "n",
    P(P) => "p",
    Rtfonly(Rtfonly) => "rtfonly",
    Startuml(Startuml) => "startuml",
    Verbatim(Verbatim) => "verbatim",
    Vhdlflow(Vhdlflow) => "vhdlflow",
    Xmlonly(Xmlonly) => "xmlonly",

    // Escaped symbols
    Ampersand(Ampersand) => "&",
    At(At) => "@",
    Backslash(Backslash) => "\\",
    Dollar(Dollar) => "$",
    DoubleColon(DoubleColon) => "::",
    Equals(Equals) => "=",
    GreaterThan(GreaterThan) => ">",
    Hashtag(Hashtag) => "#",
    LessThan(LessThan) => "<",
    MDash(MDash) => "---",
    NDash(NDash) => "--",
    Percent(Percent) => "%",
    Period(Period) => ".",
    Pipe(Pipe) => "|",
    Quote(Quote) => "\"",
    Tilde(Tilde) => "~",
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
