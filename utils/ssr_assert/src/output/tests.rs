use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_plain_colorer_is_identity() {
    assert_eq!(PlainColorer.paint("[Bug]", Color::Red), "[Bug]");
}

#[test]
fn test_ansi_colorer_wraps_with_reset() {
    assert_eq!(
        AnsiColorer.paint("[Warning]", Color::Yellow),
        "\x1b[1;33m[Warning]\x1b[0m"
    );
    assert_eq!(
        AnsiColorer.paint("[Info]", Color::Blue),
        "\x1b[1;34m[Info]\x1b[0m"
    );
    assert_eq!(AnsiColorer.paint("[Bug]", Color::Red), "\x1b[1;31m[Bug]\x1b[0m");
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_colorer() {
    assert_eq!(ColorMode::Never.colorer(true).paint("x", Color::Red), "x");
    assert_eq!(
        ColorMode::Auto.colorer(true).paint("x", Color::Red),
        "\x1b[1;31mx\x1b[0m"
    );
}

#[test]
fn test_closures_are_plug_points() {
    let upper = |text: &str, _: Color| text.to_uppercase();
    assert_eq!(upper.paint("[info]", Color::Blue), "[INFO]");

    let seen = std::sync::Mutex::new(Vec::new());
    let logger = |msg: &LogMessage, level: LogLevel| {
        seen.lock().unwrap().push(format!("{level}: {msg}"));
    };
    logger.log(&LogMessage::Text("hello".to_string()), LogLevel::Warn);
    assert_eq!(seen.into_inner().unwrap(), vec!["warn: hello".to_string()]);
}

#[test]
fn test_log_message_display() {
    let text = LogMessage::Text("[pkg][Info] hi".to_string());
    assert_eq!(text.to_string(), "[pkg][Info] hi");
    assert_eq!(text.message(), "[pkg][Info] hi");

    let err = LogMessage::Error(ProjectError::new("[pkg][Warning] careful".to_string()));
    assert_eq!(err.message(), "[pkg][Warning] careful");
    assert!(err.to_string().starts_with("Error: [pkg][Warning] careful\n    at "));
}

// Tracing logger

#[derive(Clone, Default)]
struct Captured(Arc<parking_lot::Mutex<Vec<u8>>>);

impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return what it formatted.
fn capture_tracing(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_tracing_logger_warn_text() {
    let out = capture_tracing(|| {
        TracingLogger.log(
            &LogMessage::Text("[pkg][Warning] careful".to_string()),
            LogLevel::Warn,
        );
    });
    assert!(out.contains("WARN"), "{out}");
    assert!(out.contains("ssr_assert"), "{out}");
    assert!(out.contains("[pkg][Warning] careful"), "{out}");
}

#[test]
fn test_tracing_logger_info() {
    let out = capture_tracing(|| {
        TracingLogger.log(&LogMessage::Text("[pkg][Info] ready".to_string()), LogLevel::Info);
    });
    assert!(out.contains("INFO"), "{out}");
    assert!(out.contains("[pkg][Info] ready"), "{out}");
}

#[test]
fn test_tracing_logger_warn_error_records_location() {
    let err = ProjectError::new("[pkg][Warning] slow".to_string());
    let location = err.location().to_string();
    let out = capture_tracing(|| TracingLogger.log(&LogMessage::Error(err), LogLevel::Warn));
    assert!(out.contains("WARN"), "{out}");
    assert!(out.contains(&format!("location={location}")), "{out}");
    assert!(out.contains("[pkg][Warning] slow"), "{out}");
}

#[test]
fn test_tracing_logger_through_context() {
    let ctx = crate::DiagnosticContext::new(
        crate::ProjectInfo::new("pkg", "1.2.3", "Pkg", "https://example.com/pkg").unwrap(),
    );
    ctx.set_logger(Arc::new(TracingLogger));
    let out = capture_tracing(|| {
        ctx.assert_warning(false, "via context", crate::WarningOptions::default());
    });
    assert!(out.contains("WARN"), "{out}");
    assert!(out.contains("[pkg][Warning] via context"), "{out}");
}
