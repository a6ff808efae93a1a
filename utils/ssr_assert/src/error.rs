//! The error raised or returned by halting and constructed diagnostics.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt::Write;
use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Header line every rendered stack starts with, followed by the message.
pub(crate) const STACK_HEADER: &str = "Error: ";

/// A tagged diagnostic turned into an error value.
///
/// `Display` yields the full tagged message. The recorded location is the
/// caller of the public diagnostic operation, not a frame inside this crate,
/// because every operation on the way here is `#[track_caller]`.
///
/// Bug and usage assertions panic with this type as the payload; recover it
/// with [`TagCodec::decode`](crate::TagCodec::decode) or a downcast.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct ProjectError {
    message: String,
    location: &'static Location<'static>,
    stack: String,
}

impl ProjectError {
    #[track_caller]
    pub(crate) fn new(message: String) -> Self {
        let location = Location::caller();
        let stack = render_stack(&message, location);
        ProjectError {
            message,
            location,
            stack,
        }
    }

    /// The tagged message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source location of the code that reported the diagnostic.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Rendered stack: an `Error: <message>` header, the caller location, then
    /// the captured backtrace when `RUST_BACKTRACE` enables one.
    pub fn stack(&self) -> &str {
        &self.stack
    }
}

fn render_stack(message: &str, location: &Location<'_>) -> String {
    let mut stack = format!("{STACK_HEADER}{message}\n    at {location}");
    let backtrace = Backtrace::capture();
    if backtrace.status() == BacktraceStatus::Captured {
        let _ = write!(stack, "\n{backtrace}");
    }
    stack
}

/// Extra context attached to a bug report for maintainers.
#[derive(Clone, Debug, PartialEq)]
pub enum DebugInfo {
    /// Inlined verbatim.
    Text(String),
    /// Rendered as compact JSON wrapped in backticks.
    Value(serde_json::Value),
}

impl DebugInfo {
    /// Capture any serializable value as debug info.
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(DebugInfo::Value)
    }

    /// Empty text, `null`, `false`, `0` and `""` carry nothing worth reporting.
    pub(crate) fn is_falsy(&self) -> bool {
        match self {
            DebugInfo::Text(text) => text.is_empty(),
            DebugInfo::Value(serde_json::Value::Null) => true,
            DebugInfo::Value(serde_json::Value::Bool(b)) => !b,
            DebugInfo::Value(serde_json::Value::Number(n)) => n.as_f64() == Some(0.0),
            DebugInfo::Value(serde_json::Value::String(s)) => s.is_empty(),
            DebugInfo::Value(_) => false,
        }
    }

    pub(crate) fn render(&self) -> String {
        match self {
            DebugInfo::Text(text) | DebugInfo::Value(serde_json::Value::String(text)) => {
                text.clone()
            }
            DebugInfo::Value(value) => format!("`{value}`"),
        }
    }
}

impl From<&str> for DebugInfo {
    fn from(text: &str) -> Self {
        DebugInfo::Text(text.to_string())
    }
}

impl From<String> for DebugInfo {
    fn from(text: String) -> Self {
        DebugInfo::Text(text)
    }
}

impl From<serde_json::Value> for DebugInfo {
    fn from(value: serde_json::Value) -> Self {
        DebugInfo::Value(value)
    }
}
