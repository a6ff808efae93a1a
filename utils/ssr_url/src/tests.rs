use std::panic::{catch_unwind, AssertUnwindSafe};

use super::*;
use pretty_assertions::assert_eq;
use ssr_assert::{ProjectError, ProjectInfo};

fn url(pathname: &str, search: Option<&str>, hash: Option<&str>) -> ParsedUrl {
    ParsedUrl {
        pathname: pathname.to_string(),
        search_original: search.map(str::to_string),
        hash_original: hash.map(str::to_string),
    }
}

fn context() -> DiagnosticContext {
    DiagnosticContext::new(
        ProjectInfo::new("pkg", "1.2.3", "Pkg", "https://example.com/pkg").unwrap(),
    )
}

#[test]
fn test_full_url() {
    let parsed = url("/products", Some("?page=2"), Some("#reviews"));
    assert_eq!(
        current_url_with(&context(), &parsed, UrlOptions::default()),
        "/products?page=2#reviews"
    );
}

#[test]
fn test_without_hash() {
    let parsed = url("/products", Some("?page=2"), Some("#reviews"));
    let options = UrlOptions { without_hash: true };
    assert_eq!(
        current_url_with(&context(), &parsed, options),
        "/products?page=2"
    );
}

#[test]
fn test_missing_parts() {
    assert_eq!(
        current_url_with(&context(), &url("/", None, None), UrlOptions::default()),
        "/"
    );
    assert_eq!(
        current_url_with(&context(), &url("/a", None, Some("#x")), UrlOptions::default()),
        "/a#x"
    );
}

#[test]
fn test_global_context() {
    assert_eq!(
        current_url(&url("/about", None, None), UrlOptions::default()),
        "/about"
    );
}

#[test]
fn test_relative_path_is_a_bug() {
    let ctx = context();
    let parsed = url("relative", None, None);
    let payload = catch_unwind(AssertUnwindSafe(|| {
        current_url_with(&ctx, &parsed, UrlOptions::default())
    }))
    .unwrap_err();
    let err = payload.downcast_ref::<ProjectError>().unwrap();
    assert!(err.message().starts_with("[pkg@1.2.3][Bug] "));
    assert!(!err.message().contains("Debug info"));
    assert_eq!(err.location().file(), file!());
    assert!(ctx.has_logged());

    let decoded = ctx.codec().decode(&*payload);
    assert!(decoded.is_some_and(|m| m.shows_version));
}
