//! Request-path normalization.
//!
//! [`crate::RouteTree::resolve`] expects a canonical path: resolving is
//! string matching against generator output, so the caller strips the
//! query string and settles dot segments and doubled slashes first. This
//! module is that step.

/// Returns the canonical form of a request path:
///
/// 1. Everything from the first `?` or `#` is dropped.
/// 2. Repeated slashes collapse to one.
/// 3. `.` segments are eliminated; `..` segments remove the preceding
///    segment and never climb above the root.
/// 4. The result always begins with `/`.
///
/// A meaningful trailing slash is preserved — the manifest distinguishes
/// `/site/` from `/site`. Malformed input never errors: every string
/// normalizes to some path, and a path matching no route resolves to the
/// catch-all downstream.
///
/// ```
/// use siteroute::path::normalize;
///
/// assert_eq!(normalize("/docs//install/?hl=ko"), "/docs/install/");
/// assert_eq!(normalize("/docs/./api/../db"), "/docs/db");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(raw: &str) -> String {
    let raw = match raw.find(['?', '#']) {
        Some(cut) => &raw[..cut],
        None => raw,
    };

    // A `.` tail is a directory reference, a `..` tail consumes the last
    // segment outright.
    let trailing = raw.ends_with('/') || raw.ends_with("/.");

    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut out = String::with_capacity(raw.len() + 1);
    for segment in &segments {
        out.push('/');
        out.push_str(segment);
    }

    if out.is_empty() {
        out.push('/');
    } else if trailing {
        out.push('/');
    }
    out
}
