//! Conditional GET support
//!
//! JSON bodies carry a weak `ETag`; a matching `If-None-Match` turns the
//! response into a bodiless 304.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Weak `ETag` built from the body length and a hash of its bytes,
/// e.g. `W/"c-1f2e3d4c5b6a7988"`
pub fn generate_weak_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("W/\"{:x}-{v:x}\"", content.len())
}

/// Whether the client's `If-None-Match` names `etag`
///
/// Accepts a comma separated list and the `*` wildcard. Comparison is
/// weak: a `W/` prefix on either side is ignored.
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    let etag = strip_weak(etag);
    if_none_match.is_some_and(|client| {
        client
            .split(',')
            .map(str::trim)
            .any(|e| e == "*" || strip_weak(e) == etag)
    })
}

fn strip_weak(tag: &str) -> &str {
    tag.strip_prefix("W/").unwrap_or(tag)
}
