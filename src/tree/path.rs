//! Module path resolution.
//!
//! # Responsibilities
//! - Qualify a caller-supplied path against a node's full name
//! - Split a qualified path into the next local segment and the remainder
//!
//! # Design Decisions
//! - Pure string functions, no locking, safe under any guard
//! - Empty segments (`".svc"`, `"svc."`, `"a..b"`) are dropped before a walk,
//!   so every step of a walk consumes a non-empty segment
//! - A path already starting with `<node>.` is taken as fully qualified,
//!   so `"child"` and `"parent.child"` resolve the same on `parent`

use std::borrow::Cow;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Join a parent's full name with a local segment.
pub fn join(parent: &str, local: &str) -> String {
    if parent.is_empty() {
        local.to_string()
    } else {
        format!("{}{}{}", parent, SEPARATOR, local)
    }
}

/// Drop empty segments from `path`. Borrows when there are none.
pub fn normalize(path: &str) -> Cow<'_, str> {
    if path.split(SEPARATOR).all(|segment| !segment.is_empty()) {
        return Cow::Borrowed(path);
    }

    let segments: Vec<&str> = path
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect();
    Cow::Owned(segments.join(&SEPARATOR.to_string()))
}

/// Strip `<node_name>.` from the front of `path`, if present.
fn strip_node_prefix<'a>(node_name: &str, path: &'a str) -> Option<&'a str> {
    path.strip_prefix(node_name)?.strip_prefix(SEPARATOR)
}

/// Return `path` in its fully-qualified form relative to `node_name`.
pub fn qualify<'a>(node_name: &str, path: &'a str) -> Cow<'a, str> {
    if node_name.is_empty() || strip_node_prefix(node_name, path).is_some() {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(join(node_name, path))
    }
}

/// Split `path` into `(local, rest)` as seen from `node_name`.
///
/// `local` is the immediate child segment; `rest` is what remains below it
/// and is empty when `local` is the final segment.
pub fn split_local<'a>(node_name: &str, path: &'a str) -> (&'a str, &'a str) {
    let relative = if node_name.is_empty() {
        path
    } else {
        strip_node_prefix(node_name, path).unwrap_or(path)
    };

    relative.split_once(SEPARATOR).unwrap_or((relative, ""))
}
