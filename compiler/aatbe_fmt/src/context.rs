//! Formatting configuration and line state.
//!
//! Indentation is written lazily: a newline only records that the next
//! fragment starts a line, so blank lines never carry trailing spaces.

use crate::emitter::{Emitter, StringEmitter};

/// Spaces per indentation level by default.
pub const INDENT_WIDTH: usize = 4;

/// Formatter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Indentation size in spaces.
    pub indent_size: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_size: INDENT_WIDTH,
        }
    }
}

impl FormatConfig {
    pub fn with_indent_size(indent_size: usize) -> Self {
        Self { indent_size }
    }
}

/// Emitter plus the current indentation level.
pub struct FormatContext<E: Emitter = StringEmitter> {
    emitter: E,
    config: FormatConfig,
    level: usize,
    at_line_start: bool,
}

impl FormatContext<StringEmitter> {
    pub fn new(config: FormatConfig) -> Self {
        Self::with_emitter(StringEmitter::new(), config)
    }

    /// Finish and return the text with a single trailing newline.
    pub fn finish(mut self) -> String {
        self.emitter.ensure_trailing_newline();
        self.emitter.output()
    }

    pub fn as_str(&self) -> &str {
        self.emitter.as_str()
    }
}

impl<E: Emitter> FormatContext<E> {
    pub fn with_emitter(emitter: E, config: FormatConfig) -> Self {
        FormatContext {
            emitter,
            config,
            level: 0,
            at_line_start: true,
        }
    }

    pub fn config(&self) -> FormatConfig {
        self.config
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn emit(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.emitter.emit_indent(self.level * self.config.indent_size);
            self.at_line_start = false;
        }
        self.emitter.emit(text);
    }

    pub fn emit_space(&mut self) {
        self.emit(" ");
    }

    pub fn newline(&mut self) {
        self.emitter.emit_newline();
        self.at_line_start = true;
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }
}
