//! Output sink for rendered documentation
//!
//! The [`Emitter`] trait is the only surface directives and blocks write through.
//! Callers never produce whitespace for indentation themselves: the sink tracks the
//! current depth and the first write of every line emits one indentation unit per
//! level, including lines that arrive embedded in a single write. A bare
//! [`Emitter::newline`] is not a write and leaves its line empty.
//!
//! [`TextEmitter`] is the in-memory implementation. It accumulates text in a
//! `String` and is read back with [`TextEmitter::as_str`], [`TextEmitter::as_bytes`]
//! or [`TextEmitter::into_string`] once rendering is done.
//!
//! Use the [`emit!`](crate::emit) and [`emitln!`](crate::emitln) macros to write
//! formatted text, in the same way `write!`/`writeln!` are used with `std::fmt`.

pub mod wrap;

use crate::error::{Error, Result};
use crate::settings::EmitterSettings;
use std::fmt;

pub use wrap::wrap;

/// Line width used when none is configured
pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

/// Whitespace emitted once per indent level
pub const DEFAULT_INDENT_UNIT: &str = "\t";

/// Prefix written before every line produced by [`Emitter::comment`]
pub const COMMENT_MARKER: &str = "//";

/// A sequential text sink with indentation state
///
/// Implementations must guarantee that every written line starts with exactly
/// `indent_depth()` indentation units, and that driving the depth below zero halts
/// rendering instead of clamping.
pub trait Emitter {
    /// Adjust the indent depth by `delta` levels.
    ///
    /// # Panics
    ///
    /// Panics when the resulting depth would be negative. An unbalanced indent is a
    /// bug in the code composing the output, and continuing would produce wrongly
    /// indented documentation.
    fn indent(&mut self, delta: isize);

    /// Write formatted text without terminating the line.
    ///
    /// The first write since the last newline emits the indentation for the
    /// current depth, even when the text is empty.
    fn print(&mut self, args: fmt::Arguments<'_>);

    /// Terminate the current line
    fn newline(&mut self);

    /// Current indent depth in levels
    fn indent_depth(&self) -> usize;

    /// Configured maximum line width, used by [`Emitter::comment`]
    fn max_line_length(&self) -> usize;

    /// Write formatted text and terminate the line
    fn println(&mut self, args: fmt::Arguments<'_>) {
        self.print(args);
        self.newline();
    }

    /// Write `text` as a word-wrapped block of `//` line comments.
    ///
    /// The wrap width is the maximum line length minus the current indent depth.
    /// Empty text writes nothing.
    fn comment(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let width = self
            .max_line_length()
            .saturating_sub(self.indent_depth())
            .max(1);
        for line in wrap(text, width) {
            if line.is_empty() {
                self.println(format_args!("{COMMENT_MARKER}"));
            } else {
                self.println(format_args!("{COMMENT_MARKER} {line}"));
            }
        }
    }
}

/// Write formatted text to an [`Emitter`] without ending the line.
///
/// The first argument must be a mutable reference to an emitter
/// (`&mut TextEmitter` or `&mut dyn Emitter`).
#[macro_export]
macro_rules! emit {
    ($out:expr, $($arg:tt)*) => {
        $crate::emitter::Emitter::print(&mut *$out, ::std::format_args!($($arg)*))
    };
}

/// Write formatted text to an [`Emitter`] and end the line.
#[macro_export]
macro_rules! emitln {
    ($out:expr) => {
        $crate::emitter::Emitter::newline(&mut *$out)
    };
    ($out:expr, $($arg:tt)*) => {
        $crate::emitter::Emitter::println(&mut *$out, ::std::format_args!($($arg)*))
    };
}

/// In-memory [`Emitter`] accumulating text into a `String`
#[derive(Debug, Clone)]
pub struct TextEmitter {
    buffer: String,
    max_line_length: usize,
    indent_unit: String,
    indent_depth: usize,
    line_start: bool,
}

impl TextEmitter {
    /// Create an empty emitter with the given maximum line width and tab indentation
    pub fn new(max_line_length: usize) -> Self {
        TextEmitter {
            buffer: String::new(),
            max_line_length,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            indent_depth: 0,
            line_start: true,
        }
    }

    /// Create an emitter configured from loaded settings
    pub fn from_settings(settings: &EmitterSettings) -> Self {
        Self::new(settings.max_line_length).with_indent_unit(&settings.indent_unit)
    }

    /// Replace the whitespace written per indent level
    pub fn with_indent_unit(mut self, unit: &str) -> Self {
        self.indent_unit = unit.to_string();
        self
    }

    /// Adjust the indent depth, reporting underflow instead of panicking.
    ///
    /// On error the depth is left unchanged.
    pub fn try_indent(&mut self, delta: isize) -> Result<()> {
        let depth = self.indent_depth;
        self.indent_depth = depth
            .checked_add_signed(delta)
            .ok_or(Error::UnbalancedIndent { depth, delta })?;
        Ok(())
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// Rendered text so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Rendered text so far, as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Consume the emitter and return the rendered text
    pub fn into_string(self) -> String {
        self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    // A trailing `\n` leaves the next line pending, so a later indent change still
    // applies to it.
    fn push_text(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.push_fragment(first);
        }
        let mut lines = lines.peekable();
        while let Some(line) = lines.next() {
            self.newline();
            if !line.is_empty() || lines.peek().is_some() {
                self.push_fragment(line);
            }
        }
    }

    fn push_fragment(&mut self, fragment: &str) {
        if self.line_start {
            for _ in 0..self.indent_depth {
                self.buffer.push_str(&self.indent_unit);
            }
            self.line_start = false;
        }
        self.buffer.push_str(fragment);
    }
}

impl Default for TextEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH)
    }
}

impl Emitter for TextEmitter {
    fn indent(&mut self, delta: isize) {
        if let Err(err) = self.try_indent(delta) {
            panic!("{err}");
        }
    }

    fn print(&mut self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(text) => self.push_text(text),
            None => self.push_text(&args.to_string()),
        }
    }

    fn newline(&mut self) {
        self.buffer.push('\n');
        self.line_start = true;
    }

    fn indent_depth(&self) -> usize {
        self.indent_depth
    }

    fn max_line_length(&self) -> usize {
        self.max_line_length
    }
}

impl fmt::Write for TextEmitter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_text(s);
        Ok(())
    }
}

impl fmt::Display for TextEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
