//! File serving stage
//!
//! Reading files, MIME detection, range and conditional requests are left
//! to `tower-http`'s `ServeDir`; this module only adapts it to [`Handler`].
//!
//! [`Handler`]: super::Handler

use http_body_util::BodyExt;
use hyper::Request;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use super::BoxHandler;
use crate::http::RequestBody;

/// Terminal handler serving files below `root`
pub fn file_server(root: impl AsRef<Path>) -> BoxHandler {
    let service = ServeDir::new(root);
    Arc::new(move |req: Request<RequestBody>| {
        let service = service.clone();
        async move {
            match service.oneshot(req).await {
                Ok(response) => response.map(BodyExt::boxed_unsync),
                Err(never) => match never {},
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::body;
    use hyper::header::CONTENT_TYPE;
    use hyper::StatusCode;

    async fn get(handler: &BoxHandler, uri: &str) -> hyper::Response<crate::http::ResponseBody> {
        let req = Request::builder()
            .uri(uri)
            .body(body::empty_request())
            .unwrap();
        handler.handle(req).await
    }

    #[tokio::test]
    async fn test_serves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hello.txt"), "hello").unwrap();
        let handler = file_server(dir.path());

        let resp = get(&handler, "/hello.txt").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"hello");
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let handler = file_server(dir.path());
        assert_eq!(get(&handler, "/nope.txt").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_directory_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
        let handler = file_server(dir.path());

        let resp = get(&handler, "/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"<h1>home</h1>");
    }

    #[tokio::test]
    async fn test_parent_traversal_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("public");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(dir.path().join("secret.txt"), "secret").unwrap();
        let handler = file_server(&root);

        let resp = get(&handler, "/../secret.txt").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
