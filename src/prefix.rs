//! URL prefix normalization
//!
//! Turns whatever the user passed as mount point into a canonical absolute
//! path that starts and ends with `/`.

/// Lexically clean a slash-separated path: collapse repeated separators,
/// drop `.` segments and resolve `..` against the preceding segment.
/// `..` above the root of an absolute path is discarded. An empty result is
/// `.` for relative input and `/` for absolute input.
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Normalize a mount prefix.
///
/// The input is rooted before cleaning so relative `..` segments can never
/// climb out of `/`. The result always starts and ends with `/`:
///
/// | input            | prefix        |
/// |------------------|---------------|
/// | `""`, `"."`, `"/"` | `/`         |
/// | `files/img`      | `/files/img/` |
/// | `/files//img/..` | `/files/`     |
pub fn normalize_prefix(prefix: &str) -> String {
    let cleaned = clean_path(&format!("/{prefix}"));
    if cleaned == "/" {
        cleaned
    } else {
        cleaned + "/"
    }
}
