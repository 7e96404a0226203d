//! Path normalization applied before routing.
//!
//! A `.json` suffix on the last path segment is treated as a response-format
//! hint and removed, so `/abc123.json` routes like `/abc123`. Trailing slashes
//! are trimmed separately by `tower_http::normalize_path`.

use axum::extract::Request;
use axum::http::Uri;
use axum::http::uri::PathAndQuery;

const FORMAT_SUFFIX: &str = ".json";

/// Signature used by `tower::util::MapRequestLayer`.
pub type StripFormat = fn(Request) -> Request;

/// Removes a trailing `.json` format suffix from the request path.
pub fn strip_format_suffix(mut req: Request) -> Request {
    if let Some(uri) = without_format_suffix(req.uri()) {
        *req.uri_mut() = uri;
    }
    req
}

fn without_format_suffix(uri: &Uri) -> Option<Uri> {
    let stripped = uri.path().strip_suffix(FORMAT_SUFFIX)?;

    if stripped.is_empty() || stripped.ends_with('/') {
        return None;
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{stripped}?{query}"),
        None => stripped.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);

    Uri::from_parts(parts).ok()
}
