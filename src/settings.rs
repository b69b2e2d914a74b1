//! Settings loader
//!
//! `defaults/doxyblock.default.toml` is embedded into the crate so the documented
//! defaults and runtime behavior stay in sync. Callers layer their own files and
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`Settings`].
//!
//! Nothing in the rendering path reads settings on its own; they are handed to
//! [`TextEmitter::from_settings`](crate::TextEmitter::from_settings) and
//! [`Block::from_settings`](crate::Block::from_settings).

use crate::error::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../defaults/doxyblock.default.toml");

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub emitter: EmitterSettings,
    pub block: BlockSettings,
}

/// Output sink knobs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmitterSettings {
    pub max_line_length: usize,
    pub indent_unit: String,
}

/// Comment block knobs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockSettings {
    pub tag: String,
    pub open: String,
    pub close: String,
}

/// Builds [`Settings`] from sources applied in order, later ones winning.
///
/// The embedded defaults are always the first layer, so every key has a value
/// even when no file sets it. A block style shared across a project usually
/// lives in a checked-in file, with per-run tweaks such as the tag applied as
/// overrides on top.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Loader {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Add a TOML settings file; [`Loader::build`] fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Add a TOML settings file that is skipped when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        debug!(path = %path.display(), required, "layering settings file");
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key above every file, e.g. `("block.tag", "\\")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and decode them into emitter and block settings.
    pub fn build(self) -> Result<Settings> {
        let settings: Settings = self.builder.build()?.try_deserialize()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings from the embedded defaults alone: 80 columns, tab indent, `@` tag and
/// `/**` ... `*/` delimiters.
pub fn load_defaults() -> Result<Settings> {
    Loader::new().build()
}
