//! # doxyblock
//!
//! Renders Doxygen-style documentation-comment blocks from typed directive values.
//!
//! The crate has two layers:
//!
//! - [`emitter`]: the output sink. It accepts formatted writes and owns every
//!   whitespace decision (indentation, line breaks, comment wrapping).
//! - [`block`]: the aggregator. It holds an ordered list of [`Directive`]s and the
//!   tag prefix, and renders them between the comment delimiters.
//!
//! Each [`Directive`] knows how to render itself given the tag and a sink; the
//! block never looks inside them.
//!
//! ```text
//! /**
//! 	@brief Does X.
//! 	@param[in] x the input
//! */
//! ```
//!
//! The body is indented with one tab per level by default; the unit is set through
//! [`TextEmitter::with_indent_unit`] or [`EmitterSettings`].

pub mod block;
pub mod directive;
pub mod emitter;
pub mod error;
pub mod settings;

pub use block::{Block, Delimiters, DEFAULT_TAG};
pub use directive::{Direction, Directive, DirectiveKind, Render};
pub use emitter::{Emitter, TextEmitter};
pub use error::{Error, Result};
pub use settings::{BlockSettings, EmitterSettings, Loader, Settings};
