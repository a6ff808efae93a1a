//! The diagnostic emitter.
//!
//! A [`DiagnosticContext`] owns the mutable diagnostic state: the set of
//! already-logged dedup keys, the pre-log hook, the "has logged" flag and the
//! active logger and colorer. Every operation is gated on a condition and does
//! nothing when the condition holds.
//!
//! # Halting
//!
//! [`assert_bug`](DiagnosticContext::assert_bug) and
//! [`assert_usage`](DiagnosticContext::assert_usage) panic with a
//! [`ProjectError`] payload. All public operations are `#[track_caller]`, so the
//! error's location is the code that called them.
//!
//! # Locking
//!
//! State sits behind a mutex that is only held for short read-modify-write
//! sections. The hook, logger and colorer are cloned out before being called,
//! so they may call back into the same context, and replacing one never
//! affects a call already in flight.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;

use crate::output::{Colorer, LogLevel, LogMessage, Logger, PlainColorer, StdLogger};
use crate::panic_hook;
use crate::{DebugInfo, DiagnosticKind, ProjectError, ProjectInfo, TagCodec};

type Hook = Arc<dyn Fn() + Send + Sync>;

/// Dedup policy for warnings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OnlyOnce {
    /// Log every time.
    Never,
    /// Log once per distinct tagged message.
    #[default]
    Message,
    /// Log once per key, so several messages can share one suppression key.
    Key(String),
}

impl From<bool> for OnlyOnce {
    fn from(once: bool) -> Self {
        if once {
            OnlyOnce::Message
        } else {
            OnlyOnce::Never
        }
    }
}

/// An empty key means "log every time", like `false`.
impl From<&str> for OnlyOnce {
    fn from(key: &str) -> Self {
        if key.is_empty() {
            OnlyOnce::Never
        } else {
            OnlyOnce::Key(key.to_string())
        }
    }
}

impl From<String> for OnlyOnce {
    fn from(key: String) -> Self {
        if key.is_empty() {
            OnlyOnce::Never
        } else {
            OnlyOnce::Key(key)
        }
    }
}

/// Options for [`DiagnosticContext::assert_warning`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WarningOptions {
    /// Dedup policy; see [`OnlyOnce`].
    pub only_once: OnlyOnce,
    /// Hand the logger a [`ProjectError`] (with location and stack) instead of
    /// a plain string.
    pub show_stack_trace: bool,
}

impl WarningOptions {
    /// Set the dedup policy.
    #[must_use]
    pub fn only_once(mut self, only_once: impl Into<OnlyOnce>) -> Self {
        self.only_once = only_once.into();
        self
    }

    /// Attach a stack trace to the logged warning.
    #[must_use]
    pub fn with_stack_trace(mut self) -> Self {
        self.show_stack_trace = true;
        self
    }
}

struct State {
    already_logged: FxHashSet<String>,
    on_before_log: Option<Hook>,
    has_logged: bool,
    logger: Arc<dyn Logger>,
    colorer: Arc<dyn Colorer>,
}

/// Diagnostic state plus the operations that read and update it.
///
/// Use the process-wide instance through [`global`](crate::global) and the
/// crate-root functions, or construct one and inject it where isolation is
/// needed (tests, embedding several projects in one process).
pub struct DiagnosticContext {
    project: ProjectInfo,
    codec: TagCodec,
    state: Mutex<State>,
}

impl Default for DiagnosticContext {
    fn default() -> Self {
        Self::new(ProjectInfo::default())
    }
}

impl DiagnosticContext {
    /// Create a context with the default logger and colorer.
    ///
    /// Also installs the panic hook that prints halting diagnostics.
    pub fn new(project: ProjectInfo) -> Self {
        panic_hook::install();
        DiagnosticContext {
            codec: TagCodec::new(&project),
            project,
            state: Mutex::new(State {
                already_logged: FxHashSet::default(),
                on_before_log: None,
                has_logged: false,
                logger: Arc::new(StdLogger),
                colorer: Arc::new(PlainColorer),
            }),
        }
    }

    pub fn project(&self) -> &ProjectInfo {
        &self.project
    }

    /// The codec used to tag messages, also used to recognize them later.
    pub fn codec(&self) -> &TagCodec {
        &self.codec
    }

    /// Assert an internal invariant.
    ///
    /// When `condition` is false, panics with a `Bug` error asking the user to
    /// report it. `debug_info` is appended for maintainers unless it is empty
    /// or otherwise falsy.
    #[track_caller]
    pub fn assert_bug(&self, condition: bool, debug_info: Option<DebugInfo>) {
        if condition {
            return;
        }
        self.bug(debug_info)
    }

    /// Unwrap an `Option` whose presence is an internal invariant.
    ///
    /// Same as [`assert_bug`](Self::assert_bug) with `value.is_some()`, but
    /// hands back the value.
    #[track_caller]
    pub fn assert_some<T>(&self, value: Option<T>, debug_info: Option<DebugInfo>) -> T {
        match value {
            Some(value) => value,
            None => self.bug(debug_info),
        }
    }

    /// Assert that the caller used the library correctly.
    ///
    /// When `condition` is false, panics with a `Wrong Usage` error carrying
    /// `message` verbatim.
    #[track_caller]
    pub fn assert_usage(&self, condition: bool, message: &str) {
        if condition {
            return;
        }
        self.mark_logged();
        let message = self.tag(DiagnosticKind::WrongUsage, message);
        self.raise(message)
    }

    /// Build an `Error` diagnostic without raising it or touching any state.
    #[track_caller]
    pub fn project_error(&self, message: &str) -> ProjectError {
        ProjectError::new(self.tag(DiagnosticKind::Error, message))
    }

    /// Log a warning through the active logger when `condition` is false.
    #[track_caller]
    pub fn assert_warning(&self, condition: bool, message: &str, options: WarningOptions) {
        if condition {
            return;
        }
        self.mark_logged();
        let message = self.tag(DiagnosticKind::Warning, message);
        let key = match options.only_once {
            OnlyOnce::Never => None,
            OnlyOnce::Message => Some(message.clone()),
            OnlyOnce::Key(key) => Some(key),
        };
        if let Some(key) = key {
            if !self.record(key) {
                return;
            }
        }
        self.run_hook();
        let entry = if options.show_stack_trace {
            LogMessage::Error(ProjectError::new(message))
        } else {
            LogMessage::Text(message)
        };
        self.log(&entry, LogLevel::Warn);
    }

    /// Log an info message through the active logger when `condition` is
    /// false. Unlike warnings, this does not count towards
    /// [`has_logged`](Self::has_logged).
    pub fn assert_info(&self, condition: bool, message: &str, only_once: bool) {
        if condition {
            return;
        }
        let message = self.tag(DiagnosticKind::Info, message);
        if only_once && !self.record(message.clone()) {
            return;
        }
        self.run_hook();
        self.log(&LogMessage::Text(message), LogLevel::Info);
    }

    /// Register the hook run right before any diagnostic is logged or raised.
    /// Replaces any previously registered hook.
    pub fn on_before_log(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.state.lock().on_before_log = Some(Arc::new(hook));
    }

    /// Whether a bug, usage error or warning has ever failed its condition.
    pub fn has_logged(&self) -> bool {
        self.state.lock().has_logged
    }

    /// Replace the logger used for warnings and info messages.
    pub fn set_logger(&self, logger: Arc<dyn Logger>) {
        self.state.lock().logger = logger;
    }

    /// Replace the colorer applied to `[<Kind>]` labels.
    pub fn set_colorer(&self, colorer: Arc<dyn Colorer>) {
        self.state.lock().colorer = colorer;
    }

    #[cold]
    #[track_caller]
    fn bug(&self, debug_info: Option<DebugInfo>) -> ! {
        self.mark_logged();
        let project_name = self.project.project_name();
        let mut parts = vec![
            format!("You stumbled upon a bug in {project_name}'s source code."),
            format!(
                "Go to {}/issues/new and copy-paste this error; a maintainer will fix the bug (usually under 24 hours).",
                self.project.repository()
            ),
        ];
        if let Some(info) = debug_info.filter(|info| !info.is_falsy()) {
            parts.push(format!(
                "Debug info (this is for the {project_name} maintainers; you can ignore this): {}",
                info.render()
            ));
        }
        let message = self.tag(DiagnosticKind::Bug, &parts.join(" "));
        self.raise(message)
    }

    #[track_caller]
    fn raise(&self, message: String) -> ! {
        let err = ProjectError::new(message);
        tracing::debug!(target: "ssr_assert", location = %err.location(), "raising {}", err.message());
        self.run_hook();
        std::panic::panic_any(err)
    }

    fn tag(&self, kind: DiagnosticKind, message: &str) -> String {
        let colorer = Arc::clone(&self.state.lock().colorer);
        self.codec.encode(kind, message, colorer.as_ref())
    }

    fn mark_logged(&self) {
        self.state.lock().has_logged = true;
    }

    /// Record a dedup key. Returns `false` if it was already recorded.
    fn record(&self, key: String) -> bool {
        let inserted = self.state.lock().already_logged.insert(key);
        if !inserted {
            tracing::trace!(target: "ssr_assert", "suppressed already-logged diagnostic");
        }
        inserted
    }

    fn run_hook(&self) {
        let hook = self.state.lock().on_before_log.clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    fn log(&self, message: &LogMessage, level: LogLevel) {
        let logger = Arc::clone(&self.state.lock().logger);
        logger.log(message, level);
    }
}
