//! Error types for doxyblock

use thiserror::Error;

/// Errors surfaced by the crate.
///
/// Rendering itself is total; the only rendering failure is an indentation
/// underflow, which [`Emitter::indent`](crate::Emitter::indent) treats as fatal
/// and [`TextEmitter::try_indent`](crate::TextEmitter::try_indent) reports here.
#[derive(Debug, Error)]
pub enum Error {
    /// An indent adjustment would drive the depth below zero
    #[error("unbalanced indentation: depth {depth} cannot be adjusted by {delta}")]
    UnbalancedIndent { depth: usize, delta: isize },

    /// Settings could not be loaded or deserialized
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A block description could not be decoded
    #[error("invalid block description: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
