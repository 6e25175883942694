//! HTTP protocol layer module
//!
//! Body types, path encoding and response builders, decoupled from the
//! pipeline stages.

pub mod body;
pub mod path;
pub mod response;

pub use body::{RequestBody, ResponseBody};
pub use path::{decode_path, encode_path};
pub use response::{build_404_response, build_redirect_response};
