//! The process-wide diagnostic context and crate-root shorthands for it.
//!
//! The context is created lazily on first use with [`ProjectInfo::default`].
//! Hosts that need a different identity call [`init`] once at startup, before
//! any diagnostic is reported.

use std::any::Any;
use std::sync::{Arc, OnceLock};

use crate::output::{Colorer, Logger};
use crate::{
    AssertMessage, ConfigError, DebugInfo, DiagnosticContext, ProjectError, ProjectInfo,
    WarningOptions,
};

static GLOBAL: OnceLock<DiagnosticContext> = OnceLock::new();

/// Install the process-wide context for `project`.
///
/// Fails if the context was already created, either by an earlier `init` or
/// by a diagnostic reported before it.
pub fn init(project: ProjectInfo) -> Result<(), ConfigError> {
    GLOBAL
        .set(DiagnosticContext::new(project))
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// The process-wide context.
pub fn global() -> &'static DiagnosticContext {
    GLOBAL.get_or_init(DiagnosticContext::default)
}

/// See [`DiagnosticContext::assert_bug`].
#[track_caller]
pub fn assert_bug(condition: bool, debug_info: Option<DebugInfo>) {
    global().assert_bug(condition, debug_info);
}

/// See [`DiagnosticContext::assert_some`].
#[track_caller]
pub fn assert_some<T>(value: Option<T>, debug_info: Option<DebugInfo>) -> T {
    global().assert_some(value, debug_info)
}

/// See [`DiagnosticContext::assert_usage`].
#[track_caller]
pub fn assert_usage(condition: bool, message: &str) {
    global().assert_usage(condition, message);
}

/// See [`DiagnosticContext::project_error`].
#[track_caller]
pub fn project_error(message: &str) -> ProjectError {
    global().project_error(message)
}

/// See [`DiagnosticContext::assert_warning`].
#[track_caller]
pub fn assert_warning(condition: bool, message: &str, options: WarningOptions) {
    global().assert_warning(condition, message, options);
}

/// See [`DiagnosticContext::assert_info`].
pub fn assert_info(condition: bool, message: &str, only_once: bool) {
    global().assert_info(condition, message, only_once);
}

pub fn on_before_log(hook: impl Fn() + Send + Sync + 'static) {
    global().on_before_log(hook);
}

pub fn has_logged() -> bool {
    global().has_logged()
}

pub fn set_logger(logger: Arc<dyn Logger>) {
    global().set_logger(logger);
}

pub fn set_colorer(colorer: Arc<dyn Colorer>) {
    global().set_colorer(colorer);
}

/// Recognize a caught panic payload produced by the process-wide context.
pub fn decode(payload: &dyn Any) -> Option<AssertMessage> {
    global().codec().decode(payload)
}
