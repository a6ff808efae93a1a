//! Current-URL helper.
//!
//! Rebuilds the current URL from an already-parsed URL. Parsing itself is done
//! by the host; this crate only needs the pathname and the original search and
//! hash strings.

use ssr_assert::DiagnosticContext;

/// The parts of a parsed URL the current URL is built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub pathname: String,
    /// The search string as it appeared in the URL, including `?`.
    pub search_original: Option<String>,
    /// The hash as it appeared in the URL, including `#`.
    pub hash_original: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UrlOptions {
    pub without_hash: bool,
}

/// Build the current URL (`pathname` + search + hash) using the process-wide
/// diagnostics.
///
/// Reports a bug if the result is not an absolute path.
#[track_caller]
pub fn current_url(url: &ParsedUrl, options: UrlOptions) -> String {
    current_url_with(ssr_assert::global(), url, options)
}

/// Like [`current_url`], reporting through `ctx`.
#[track_caller]
pub fn current_url_with(ctx: &DiagnosticContext, url: &ParsedUrl, options: UrlOptions) -> String {
    let mut current = url.pathname.clone();
    if let Some(search) = &url.search_original {
        current.push_str(search);
    }
    if !options.without_hash {
        if let Some(hash) = &url.hash_original {
            current.push_str(hash);
        }
    }
    ctx.assert_bug(current.starts_with('/'), None);
    current
}

#[cfg(test)]
mod tests;
