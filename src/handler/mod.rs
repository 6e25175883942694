//! Request handler module
//!
//! A [`Handler`] turns a request into a response. Middleware are plain
//! functions `BoxHandler -> BoxHandler`, composed once at startup with
//! [`Chain`] and never re-composed per request.

pub mod cache;
pub mod chain;
pub mod files;
pub mod router;
pub mod strip_prefix;

use hyper::{Request, Response};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::http::{RequestBody, ResponseBody};

pub use cache::disable_caching;
pub use chain::Chain;
pub use files::file_server;
pub use router::Router;
pub use strip_prefix::strip_prefix;

/// Future returned by [`Handler::handle`]
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response<ResponseBody>> + Send>>;

/// Shared, type-erased handler
pub type BoxHandler = Arc<dyn Handler>;

/// One stage of the request pipeline
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, req: Request<RequestBody>) -> HandlerFuture;
}

impl<F, Fut> Handler for F
where
    F: Fn(Request<RequestBody>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response<ResponseBody>> + Send + 'static,
{
    fn handle(&self, req: Request<RequestBody>) -> HandlerFuture {
        Box::pin(self(req))
    }
}
