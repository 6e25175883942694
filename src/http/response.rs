//! HTTP response building module
//!
//! Builders for the few responses the server produces itself; everything
//! else comes from the file server.

use hyper::header::{CONTENT_TYPE, LOCATION};
use hyper::{Response, StatusCode};

use super::body::{self, ResponseBody};

const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Build 404 Not Found response
pub fn build_404_response() -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .header("X-Content-Type-Options", "nosniff")
        .body(body::full(NOT_FOUND_BODY))
        .unwrap_or_else(|_| {
            let mut resp = Response::new(body::full(NOT_FOUND_BODY));
            *resp.status_mut() = StatusCode::NOT_FOUND;
            resp
        })
}

/// Build 301 Moved Permanently response
pub fn build_redirect_response(target: &str) -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(LOCATION, target)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(body::full(format!(
            "<a href=\"{target}\">Moved Permanently</a>.\n"
        )))
        .unwrap_or_else(|_| {
            let mut resp = Response::new(body::empty());
            *resp.status_mut() = StatusCode::MOVED_PERMANENTLY;
            resp
        })
}
