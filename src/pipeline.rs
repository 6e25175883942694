//! Pipeline composition
//!
//! Builds the request handler for one mount:
//! `logging -> [disable caching] -> strip prefix -> serve files`.
//! Logging is outermost so the reported time covers every inner stage, and
//! cache headers are decided around the file server's own response.

use std::path::Path;
use std::sync::Arc;

use crate::handler::{disable_caching, file_server, strip_prefix, Chain, Router};
use crate::logger::Logger;
use crate::prefix::normalize_prefix;

/// Compose the full handler chain and bind it to the normalized prefix
pub fn build_pipeline(root: &Path, prefix: &str, caching: bool, logger: &Arc<Logger>) -> Router {
    let prefix = normalize_prefix(prefix);

    let request_logger = Arc::clone(logger);
    let mut chain = Chain::new().append(move |next| request_logger.middleware(next));
    if !caching {
        chain = chain.append(disable_caching);
    }

    let handler = chain.then(strip_prefix(&prefix, file_server(root)));
    Router::new(&prefix, handler)
}
