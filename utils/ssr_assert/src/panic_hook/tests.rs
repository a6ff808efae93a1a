use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_render_project_error_shows_stack() {
    let err = ProjectError::new("[pkg][Wrong Usage] bad".to_string());
    let rendered = render(&err).unwrap();
    assert_eq!(rendered, err.stack());
    assert!(rendered.starts_with("Error: [pkg][Wrong Usage] bad\n    at "));
}

#[test]
fn test_render_other_payloads_defer() {
    assert_eq!(render(&"plain panic"), None);
    assert_eq!(render(&"owned panic".to_string()), None);
}

#[test]
fn test_install_is_idempotent() {
    install();
    install();
    let payload = std::panic::catch_unwind(|| {
        std::panic::panic_any(ProjectError::new("[pkg][Bug] caught".to_string()));
    })
    .unwrap_err();
    assert!(payload.downcast_ref::<ProjectError>().is_some());
}
