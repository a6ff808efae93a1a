//! Diagnostic kinds and their presentation rules.

use std::fmt;

use crate::output::Color;

/// The kind of a diagnostic, embedded in every tagged message as `[<Kind>]`.
///
/// The kind decides the color of the bracketed label and whether the project
/// tag carries the version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// An internal invariant was broken.
    Bug,
    /// The caller violated a usage contract.
    WrongUsage,
    /// A constructed error the caller decides when to raise.
    Error,
    /// Non-halting advisory condition.
    Warning,
    /// Non-halting informational message.
    Info,
}

impl DiagnosticKind {
    /// All kinds, in declaration order.
    pub const ALL: [DiagnosticKind; 5] = [
        DiagnosticKind::Bug,
        DiagnosticKind::WrongUsage,
        DiagnosticKind::Error,
        DiagnosticKind::Warning,
        DiagnosticKind::Info,
    ];

    /// The text shown between the brackets.
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticKind::Bug => "Bug",
            DiagnosticKind::WrongUsage => "Wrong Usage",
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
        }
    }

    /// Color applied to the `[<Kind>]` label.
    pub fn color(self) -> Color {
        match self {
            DiagnosticKind::Info => Color::Blue,
            DiagnosticKind::Warning => Color::Yellow,
            DiagnosticKind::Bug | DiagnosticKind::WrongUsage | DiagnosticKind::Error => Color::Red,
        }
    }

    /// Whether the project tag for this kind includes the version.
    #[inline]
    pub fn is_versioned(self) -> bool {
        matches!(self, DiagnosticKind::Bug)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests;
