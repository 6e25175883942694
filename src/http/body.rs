//! Body types shared by every handler in the pipeline
//!
//! Requests and responses are type-erased so middleware can be stacked
//! without knowing which concrete body the file server or hyper produce.

use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::body::{Bytes, Incoming};
use std::io;

/// Request body as seen by handlers
pub type RequestBody = UnsyncBoxBody<Bytes, hyper::Error>;

/// Response body produced by handlers
pub type ResponseBody = UnsyncBoxBody<Bytes, io::Error>;

/// Erase the body type of an inbound hyper request
pub fn from_incoming(body: Incoming) -> RequestBody {
    body.boxed_unsync()
}

/// Empty request body, used for requests built in-process
pub fn empty_request() -> RequestBody {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// Complete in-memory response body
pub fn full(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// Empty response body
pub fn empty() -> ResponseBody {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed_unsync()
}
