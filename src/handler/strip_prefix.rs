//! Prefix stripping
//!
//! Removes the mount prefix from the request path before the file server
//! sees it, re-rooting the remainder at `/`.

use hyper::http::uri::{PathAndQuery, Uri};
use hyper::Request;
use std::sync::Arc;

use super::BoxHandler;
use crate::http::{self, RequestBody};

/// Serve `next` with `prefix` removed from the request path.
/// Requests whose path does not carry the prefix get a 404.
pub fn strip_prefix(prefix: &str, next: BoxHandler) -> BoxHandler {
    let prefix: Arc<str> = Arc::from(prefix.trim_end_matches('/'));
    Arc::new(move |mut req: Request<RequestBody>| {
        let next = Arc::clone(&next);
        let prefix = Arc::clone(&prefix);
        async move {
            match strip_uri(req.uri(), &prefix) {
                Some(uri) => {
                    *req.uri_mut() = uri;
                    next.handle(req).await
                }
                None => http::build_404_response(),
            }
        }
    })
}

/// `prefix` is decoded text and must not end with `/`; an empty prefix
/// keeps the path. The remainder is re-encoded for the next stage.
fn strip_uri(uri: &Uri, prefix: &str) -> Option<Uri> {
    let decoded = http::decode_path(uri.path());
    let rest = decoded.strip_prefix(prefix)?;
    // "/static" must not match "/staticfiles/..."
    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }

    let path = http::encode_path(if rest.is_empty() { "/" } else { rest });
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}
