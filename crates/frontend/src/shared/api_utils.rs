//! API utilities for talking to the collection search service
//!
//! Provides helpers for constructing request URLs.

/// Build a full URL from a base, a path and query parameters
///
/// Parameter values are percent-encoded; keys are passed through as is.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::query_url;
///
/// let url = query_url("https://api.example.org", "/object", &[("culture", "Greek")]);
/// assert_eq!(url, "https://api.example.org/object?culture=Greek");
/// ```
pub fn query_url(base: &str, path: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("{}{}", base.trim_end_matches('/'), path);
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}
