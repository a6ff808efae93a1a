//! Message tag codec.
//!
//! Encodes a diagnostic as `<ProjectTag>[<Kind>]<space-or-none><body>` and
//! recognizes such messages again when they come back as a panic payload or
//! an error value. The tag is the only marker; nothing else about the
//! diagnostic survives, so recognition is pure prefix matching.
//!
//! The versioned tag is tested before the plain one: a message produced for a
//! `Bug` must always report that it carries the version.

use std::any::Any;

use crate::error::STACK_HEADER;
use crate::output::Colorer;
use crate::{DiagnosticKind, ProjectError, ProjectInfo};

/// A recognized diagnostic message with its project tag removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssertMessage {
    /// The message after the project tag. For versioned messages this is
    /// followed by the stack, minus its `Error: ` header line.
    pub message: String,
    /// Whether the message was tagged with the project version, i.e. whether
    /// the version should be shown alongside it.
    pub shows_version: bool,
}

/// Builds and recognizes tagged messages for one project identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagCodec {
    tag: String,
    tag_with_version: String,
}

impl TagCodec {
    pub fn new(project: &ProjectInfo) -> Self {
        TagCodec {
            tag: project.tag(),
            tag_with_version: project.tag_with_version(),
        }
    }

    /// The plain project tag, `[name]`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The versioned project tag, `[name@version]`.
    pub fn tag_with_version(&self) -> &str {
        &self.tag_with_version
    }

    /// Tag `message` as `kind`.
    ///
    /// No space is inserted when the body already starts with `[`, so
    /// `[Info][hint] ...` does not render as `[Info] [hint] ...`.
    pub fn encode(&self, kind: DiagnosticKind, message: &str, colorer: &dyn Colorer) -> String {
        let label = colorer.paint(&format!("[{kind}]"), kind.color());
        let tag = if kind.is_versioned() {
            &self.tag_with_version
        } else {
            &self.tag
        };
        let whitespace = if message.starts_with('[') { "" } else { " " };
        format!("{tag}{label}{whitespace}{message}")
    }

    /// Recognize a caught panic payload.
    ///
    /// Accepts [`ProjectError`], `String` and `&'static str` payloads. Pass the
    /// payload itself (`&*payload`), not the `Box` holding it. Returns `None`
    /// for anything that is not one of our messages.
    pub fn decode(&self, payload: &dyn Any) -> Option<AssertMessage> {
        if let Some(err) = payload.downcast_ref::<ProjectError>() {
            return self.decode_parts(err.message(), Some(err.stack()));
        }
        if let Some(message) = payload.downcast_ref::<String>() {
            return self.decode_parts(message, None);
        }
        if let Some(message) = payload.downcast_ref::<&'static str>() {
            return self.decode_parts(message, None);
        }
        None
    }

    /// Recognize an error value. Errors other than [`ProjectError`] are
    /// matched on their `Display` text.
    pub fn decode_error(&self, err: &(dyn std::error::Error + 'static)) -> Option<AssertMessage> {
        if let Some(err) = err.downcast_ref::<ProjectError>() {
            return self.decode_parts(err.message(), Some(err.stack()));
        }
        self.decode_parts(&err.to_string(), None)
    }

    fn decode_parts(&self, message: &str, stack: Option<&str>) -> Option<AssertMessage> {
        if let Some(rest) = message.strip_prefix(self.tag_with_version.as_str()) {
            let message = match stack {
                Some(stack) => format!("{rest}\n{}", strip_stack_header(stack)),
                None => rest.to_string(),
            };
            return Some(AssertMessage {
                message,
                shows_version: true,
            });
        }
        if let Some(rest) = message.strip_prefix(self.tag.as_str()) {
            return Some(AssertMessage {
                message: rest.to_string(),
                shows_version: false,
            });
        }
        None
    }
}

/// Drop the leading `Error: <message>` line so a displayed stack does not
/// repeat the message shown above it.
fn strip_stack_header(stack: &str) -> &str {
    match stack.split_once('\n') {
        Some((first, rest)) if first.starts_with(STACK_HEADER) => rest,
        None if stack.starts_with(STACK_HEADER) => "",
        _ => stack,
    }
}
