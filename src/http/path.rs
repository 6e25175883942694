//! Request path encoding
//!
//! Prefixes are configured as plain text while request targets arrive
//! percent-encoded. Routing compares decoded paths and hands the remainder
//! back to the file server re-encoded.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::borrow::Cow;

/// Bytes that cannot appear literally in a path component of a request
/// target. `/` is left alone so segments stay separated.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'%');

/// Percent-decode a raw request path. Invalid UTF-8 is replaced.
pub fn decode_path(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

/// Percent-encode a decoded path so it is valid in a URI or `Location`.
pub fn encode_path(path: &str) -> Cow<'_, str> {
    utf8_percent_encode(path, PATH).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("/static/a.css"), "/static/a.css");
        assert_eq!(decode_path("/my%20files/index.html"), "/my files/index.html");
        assert_eq!(decode_path("/fichiers/%C3%A9/"), "/fichiers/é/");
        assert_eq!(decode_path("/100%25/x"), "/100%/x");
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("/static/"), "/static/");
        assert_eq!(encode_path("/my files/"), "/my%20files/");
        assert_eq!(encode_path("/fichiers/é/"), "/fichiers/%C3%A9/");
        assert_eq!(encode_path("/100%/a?b#c"), "/100%25/a%3Fb%23c");
    }

    #[test]
    fn test_encoded_path_decodes_back() {
        for path in ["/my files/a b.txt", "/é/ü/", "/50% off/"] {
            assert_eq!(decode_path(&encode_path(path)), path);
        }
    }
}
