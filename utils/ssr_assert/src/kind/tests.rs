use super::*;

#[test]
fn test_labels() {
    assert_eq!(DiagnosticKind::Bug.label(), "Bug");
    assert_eq!(DiagnosticKind::WrongUsage.label(), "Wrong Usage");
    assert_eq!(DiagnosticKind::Error.label(), "Error");
    assert_eq!(DiagnosticKind::Warning.label(), "Warning");
    assert_eq!(DiagnosticKind::Info.label(), "Info");
}

#[test]
fn test_display_matches_label() {
    for kind in DiagnosticKind::ALL {
        assert_eq!(kind.to_string(), kind.label());
    }
}

#[test]
fn test_colors() {
    assert_eq!(DiagnosticKind::Info.color(), Color::Blue);
    assert_eq!(DiagnosticKind::Warning.color(), Color::Yellow);
    assert_eq!(DiagnosticKind::Bug.color(), Color::Red);
    assert_eq!(DiagnosticKind::WrongUsage.color(), Color::Red);
    assert_eq!(DiagnosticKind::Error.color(), Color::Red);
}

#[test]
fn test_only_bug_is_versioned() {
    let versioned: Vec<_> = DiagnosticKind::ALL
        .into_iter()
        .filter(|k| k.is_versioned())
        .collect();
    assert_eq!(versioned, vec![DiagnosticKind::Bug]);
}
