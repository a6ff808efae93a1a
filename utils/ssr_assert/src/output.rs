//! Pluggable output: where non-halting diagnostics go and how labels are colored.
//!
//! Both plug-points are traits with a single active implementation per
//! [`DiagnosticContext`](crate::DiagnosticContext). Closures implement them
//! directly, so hosts can redirect output with a one-liner:
//!
//! ```text
//! ctx.set_logger(Arc::new(move |msg: &LogMessage, level: LogLevel| ui.push(level, msg.to_string())));
//! ctx.set_colorer(ColorMode::Auto.colorer(std::io::stderr().is_terminal()));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::ProjectError;

/// ANSI color codes for terminal output.
mod colors {
    pub const RED: &str = "\x1b[1;31m"; // Bold red
    pub const YELLOW: &str = "\x1b[1;33m"; // Bold yellow
    pub const BLUE: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Severity passed to the logger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Warn,
    Info,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
        }
    }
}

/// Colors the colorer is asked to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Yellow,
}

/// What the logger receives: a tagged string, or an error carrying a stack
/// when a warning asked for one.
#[derive(Clone, Debug)]
pub enum LogMessage {
    Text(String),
    Error(ProjectError),
}

impl LogMessage {
    /// The tagged message, regardless of form.
    pub fn message(&self) -> &str {
        match self {
            LogMessage::Text(text) => text,
            LogMessage::Error(err) => err.message(),
        }
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogMessage::Text(text) => f.write_str(text),
            LogMessage::Error(err) => f.write_str(err.stack()),
        }
    }
}

/// Destination for warnings and info messages.
pub trait Logger: Send + Sync {
    fn log(&self, message: &LogMessage, level: LogLevel);
}

impl<F> Logger for F
where
    F: Fn(&LogMessage, LogLevel) + Send + Sync,
{
    fn log(&self, message: &LogMessage, level: LogLevel) {
        self(message, level);
    }
}

/// Decorates the `[<Kind>]` label of a tagged message.
pub trait Colorer: Send + Sync {
    fn paint(&self, text: &str, color: Color) -> String;
}

impl<F> Colorer for F
where
    F: Fn(&str, Color) -> String + Send + Sync,
{
    fn paint(&self, text: &str, color: Color) -> String {
        self(text, color)
    }
}

/// Default logger: info to stdout, warnings to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdLogger;

impl Logger for StdLogger {
    fn log(&self, message: &LogMessage, level: LogLevel) {
        match level {
            LogLevel::Info => println!("{message}"),
            LogLevel::Warn => eprintln!("{message}"),
        }
    }
}

/// Logger that forwards to `tracing` events, for hosts that already collect
/// spans and events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &LogMessage, level: LogLevel) {
        match (level, message) {
            (LogLevel::Info, _) => tracing::info!(target: "ssr_assert", "{message}"),
            (LogLevel::Warn, LogMessage::Error(err)) => {
                tracing::warn!(target: "ssr_assert", location = %err.location(), "{message}");
            }
            (LogLevel::Warn, LogMessage::Text(_)) => {
                tracing::warn!(target: "ssr_assert", "{message}");
            }
        }
    }
}

/// Default colorer: returns the text unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainColorer;

impl Colorer for PlainColorer {
    fn paint(&self, text: &str, _color: Color) -> String {
        text.to_string()
    }
}

/// Colorer emitting bold ANSI escape codes.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiColorer;

impl Colorer for AnsiColorer {
    fn paint(&self, text: &str, color: Color) -> String {
        let code = match color {
            Color::Red => colors::RED,
            Color::Yellow => colors::YELLOW,
            Color::Blue => colors::BLUE,
        };
        format!("{code}{text}{}", colors::RESET)
    }
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// The colorer to install for this mode.
    pub fn colorer(self, is_tty: bool) -> Arc<dyn Colorer> {
        if self.should_use_colors(is_tty) {
            Arc::new(AnsiColorer)
        } else {
            Arc::new(PlainColorer)
        }
    }
}

#[cfg(test)]
mod tests;
