//! Tagged diagnostics for vite-plugin-ssr.
//!
//! Surfaces three classes of conditions to the host application:
//! - **Bugs**: internal invariant violations ([`assert_bug`], [`assert_some`])
//! - **Usage errors**: caller misuse ([`assert_usage`])
//! - **Warnings and info**: advisory, deduplicated ([`assert_warning`], [`assert_info`])
//!
//! Every message is tagged `[<package>][<Kind>] <body>` (bugs carry
//! `[<package>@<version>]`), so error-presentation code can later recognize a
//! caught value as one of ours with [`TagCodec::decode`].
//!
//! # Halting
//!
//! Bugs and usage errors panic with a [`ProjectError`] payload after running
//! the pre-log hook. The error's location is the code that made the failing
//! assertion, not a frame inside this crate.
//!
//! ```text
//! let page = assert_some(pages.get(id), Some(DebugInfo::serialize(&id)?));
//! assert_usage(config.base.starts_with('/'), "`base` should start with `/`");
//! assert_warning(!legacy, "`legacy` is deprecated", WarningOptions::default());
//! ```
//!
//! # Plug points
//!
//! Hosts redirect output with [`set_logger`] and strip or add colors with
//! [`set_colorer`] (see [`ColorMode`]). [`on_before_log`] registers a single
//! cleanup hook run right before anything is logged or raised.

mod codec;
mod context;
mod error;
mod global;
mod kind;
pub mod output;
mod panic_hook;
mod project;

pub use codec::{AssertMessage, TagCodec};
pub use context::{DiagnosticContext, OnlyOnce, WarningOptions};
pub use error::{DebugInfo, ProjectError};
pub use global::{
    assert_bug, assert_info, assert_some, assert_usage, assert_warning, decode, global,
    has_logged, init, on_before_log, project_error, set_colorer, set_logger,
};
pub use kind::DiagnosticKind;
pub use output::{ColorMode, LogLevel, LogMessage};
pub use project::{ConfigError, ProjectInfo};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ssr_assert=debug` or `RUST_LOG=ssr_assert=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
