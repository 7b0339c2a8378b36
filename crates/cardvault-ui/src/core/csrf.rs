//! CSRF token resolution.

/// Pick the token from the meta tag, then the hidden form field, else empty.
///
/// A present meta tag wins even when its `content` is empty, mirroring how the
/// page templates render exactly one of the two sources.
#[must_use]
pub fn resolve_token(meta: Option<Option<String>>, form_field: Option<String>) -> String {
    match meta {
        Some(content) => content.unwrap_or_default(),
        None => form_field.unwrap_or_default(),
    }
}
