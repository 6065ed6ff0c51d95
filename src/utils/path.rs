//! Link and path string helpers.

/// Check if a link has a URL scheme (https:, mailto:, tel:, ...).
///
/// A valid scheme must have at least one character before the colon and
/// only contain ASCII alphanumerics or `+`, `-`, `.`.
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a URL into path and fragment parts.
///
/// Returns `(path, fragment)` where fragment is empty if no `#` is found.
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

/// Strip a leading slash from a URL path.
#[inline]
pub fn strip_leading_slash(url: &str) -> &str {
    url.trim_start_matches('/')
}
