//! Cache suppression middleware
//!
//! Applied when client caching is disabled. Conditional request headers are
//! removed so the file server always answers with the full content, and the
//! response is marked as not cacheable.

use hyper::header::{
    HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, ETAG, EXPIRES, IF_MATCH,
    IF_MODIFIED_SINCE, IF_NONE_MATCH, IF_RANGE, IF_UNMODIFIED_SINCE, LAST_MODIFIED, PRAGMA,
};
use hyper::Request;
use std::sync::Arc;

use super::BoxHandler;
use crate::http::RequestBody;

/// Request headers that could turn a response into `304 Not Modified`
static CONDITIONAL_HEADERS: [HeaderName; 5] = [
    IF_MODIFIED_SINCE,
    IF_MATCH,
    IF_NONE_MATCH,
    IF_RANGE,
    IF_UNMODIFIED_SINCE,
];

/// Validators the file server attaches to its responses
static VALIDATOR_HEADERS: [HeaderName; 2] = [ETAG, LAST_MODIFIED];

pub const NO_CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";

/// Wrap `next` so every response it produces is uncacheable
pub fn disable_caching(next: BoxHandler) -> BoxHandler {
    Arc::new(move |mut req: Request<RequestBody>| {
        let next = Arc::clone(&next);
        async move {
            strip_conditional_headers(req.headers_mut());
            let mut response = next.handle(req).await;
            apply_no_cache_headers(response.headers_mut());
            response
        }
    })
}

fn strip_conditional_headers(headers: &mut HeaderMap) {
    for name in &CONDITIONAL_HEADERS {
        headers.remove(name);
    }
}

fn apply_no_cache_headers(headers: &mut HeaderMap) {
    for name in &VALIDATOR_HEADERS {
        headers.remove(name);
    }
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE_CONTROL));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::body;
    use hyper::{Response, StatusCode};

    /// Stand-in for the file server: honours `If-None-Match` and sets
    /// validators on full responses.
    fn validating_handler() -> BoxHandler {
        Arc::new(|req: Request<RequestBody>| async move {
            let status = if req.headers().contains_key(IF_NONE_MATCH) {
                StatusCode::NOT_MODIFIED
            } else {
                StatusCode::OK
            };
            Response::builder()
                .status(status)
                .header(ETAG, "\"abc123\"")
                .header(LAST_MODIFIED, "Mon, 01 Jan 2024 00:00:00 GMT")
                .header(CACHE_CONTROL, "public, max-age=3600")
                .body(body::full("content"))
                .unwrap()
        })
    }

    fn conditional_request() -> Request<RequestBody> {
        Request::builder()
            .uri("/index.html")
            .header(IF_NONE_MATCH, "\"abc123\"")
            .header(IF_MODIFIED_SINCE, "Mon, 01 Jan 2024 00:00:00 GMT")
            .body(body::empty_request())
            .unwrap()
    }

    #[tokio::test]
    async fn test_conditional_request_is_not_short_circuited() {
        let handler = disable_caching(validating_handler());
        let resp = handler.handle(conditional_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CACHE_CONTROL], NO_CACHE_CONTROL);
        assert_eq!(resp.headers()[PRAGMA], "no-cache");
        assert_eq!(resp.headers()[EXPIRES], "0");
    }

    #[tokio::test]
    async fn test_validators_are_removed() {
        let handler = disable_caching(validating_handler());
        let resp = handler.handle(conditional_request()).await;

        assert!(resp.headers().get(ETAG).is_none());
        assert!(resp.headers().get(LAST_MODIFIED).is_none());
        assert_eq!(resp.headers().get_all(CACHE_CONTROL).iter().count(), 1);
    }

    #[tokio::test]
    async fn test_without_middleware_validators_pass_through() {
        let resp = validating_handler().handle(conditional_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
        assert_eq!(resp.headers()[ETAG], "\"abc123\"");
    }

    #[test]
    fn test_strip_conditional_headers_keeps_others() {
        let mut headers = HeaderMap::new();
        for name in &CONDITIONAL_HEADERS {
            headers.insert(name, HeaderValue::from_static("x"));
        }
        headers.insert("range", HeaderValue::from_static("bytes=0-1"));
        strip_conditional_headers(&mut headers);
        assert_eq!(headers.len(), 1);
        assert!(headers.contains_key("range"));
    }
}
