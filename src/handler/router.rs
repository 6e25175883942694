//! Request routing dispatch module
//!
//! A single mount: paths under the prefix go to the pipeline, the prefix
//! without its trailing slash is redirected, anything else is a 404.

use hyper::Request;
use std::sync::Arc;

use super::{BoxHandler, Handler, HandlerFuture};
use crate::http::{self, RequestBody};

/// Outcome of matching a request path against the mount prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Path is under the prefix
    Mounted,
    /// Path is the prefix without trailing slash; redirect to this target
    Redirect(String),
    /// Not handled
    NotFound,
}

/// Binds one handler to a normalized prefix
pub struct Router {
    prefix: Arc<str>,
    handler: BoxHandler,
}

impl Router {
    /// `prefix` must be normalized (leading and trailing `/`)
    pub fn new(prefix: &str, handler: BoxHandler) -> Self {
        Self {
            prefix: Arc::from(prefix),
            handler,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Decide where a request goes without running it. The prefix is
    /// compared against the percent-decoded path.
    pub fn match_route(&self, req: &Request<RequestBody>) -> Route {
        let path = http::decode_path(req.uri().path());
        if path.starts_with(&*self.prefix) {
            return Route::Mounted;
        }

        let bare = self.prefix.trim_end_matches('/');
        if !bare.is_empty() && path == bare {
            let location = http::encode_path(&self.prefix);
            let target = match req.uri().query() {
                Some(query) => format!("{location}?{query}"),
                None => location.into_owned(),
            };
            return Route::Redirect(target);
        }

        Route::NotFound
    }
}

impl Handler for Router {
    fn handle(&self, req: Request<RequestBody>) -> HandlerFuture {
        match self.match_route(&req) {
            Route::Mounted => self.handler.handle(req),
            Route::Redirect(target) => {
                Box::pin(async move { http::build_redirect_response(&target) })
            }
            Route::NotFound => Box::pin(async { http::build_404_response() }),
        }
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router").field("prefix", &self.prefix).finish()
    }
}
