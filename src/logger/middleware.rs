//! Request logging middleware
//!
//! Tags each request with a random correlation id and logs its arrival and
//! completion, including the time spent in every inner stage.

use hyper::Request;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use super::Logger;
use crate::handler::BoxHandler;
use crate::http::RequestBody;

impl Logger {
    /// Wrap `next` with entry/exit logging at Info level
    pub fn middleware(self: &Arc<Self>, next: BoxHandler) -> BoxHandler {
        let logger = Arc::clone(self);
        Arc::new(move |req: Request<RequestBody>| {
            let logger = Arc::clone(&logger);
            let next = Arc::clone(&next);
            async move {
                let ctx = Uuid::new_v4().to_string();
                let request_uri = request_uri(&req);
                logger.info_with_context(&ctx, format_args!("Received request for '{request_uri}'."));

                let begin = Instant::now();
                let response = next.handle(req).await;
                let processed_in = begin.elapsed();

                logger.info_with_context(
                    &ctx,
                    format_args!("Processed request for '{request_uri}' in {processed_in:?}."),
                );
                response
            }
        })
    }
}

/// Request target as received: path plus query
fn request_uri(req: &Request<RequestBody>) -> String {
    req.uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), ToString::to_string)
}
