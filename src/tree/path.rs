//! Slash-delimited path helpers.
//!
//! Paths are normalized strings: the root is `"/"` and every other path is
//! `"/"` followed by node names joined with `/`, never ending in `/`.
//! Containment checks compare whole segments, so `/dist` does not contain
//! `/dist-old`.

/// Canonical root path.
pub const ROOT: &str = "/";

/// Join a child name onto a parent path.
pub fn join(parent: &str, name: &str) -> String {
    if parent == ROOT || parent.is_empty() {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Iterate over the non-empty segments of a path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Canonical form of `path`: empty segments dropped, leading `/` added,
/// trailing `/` removed. `"a//b/"` becomes `"/a/b"`, `""` becomes `"/"`.
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    for seg in segments(path) {
        out.push('/');
        out.push_str(seg);
    }
    if out.is_empty() {
        out.push_str(ROOT);
    }
    out
}

/// Number of segments below the root (`"/"` is depth 0).
pub fn depth(path: &str) -> usize {
    segments(path).count()
}

/// True if `path` equals `ancestor` or lies beneath it.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    let mut inner = segments(path);
    for expected in segments(ancestor) {
        match inner.next() {
            Some(seg) if seg == expected => {}
            _ => return false,
        }
    }
    true
}

/// Parent path, or `None` for the root.
pub fn parent(path: &str) -> Option<String> {
    let segs: Vec<&str> = segments(path).collect();
    if segs.is_empty() {
        return None;
    }
    if segs.len() == 1 {
        return Some(ROOT.to_string());
    }
    Some(format!("/{}", segs[..segs.len() - 1].join("/")))
}

/// Strict ancestors of `path`, ordered from the root down. Includes the root.
pub fn ancestors(path: &str) -> Vec<String> {
    let segs: Vec<&str> = segments(path).collect();
    if segs.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(segs.len());
    result.push(ROOT.to_string());
    let mut current = String::new();
    for seg in &segs[..segs.len() - 1] {
        current.push('/');
        current.push_str(seg);
        result.push(current.clone());
    }
    result
}

/// Ancestor-or-self paths below the root, ordered from the root down,
/// paired with the segment that ends each of them.
pub fn prefixes(path: &str) -> Vec<(String, &str)> {
    let mut result = Vec::new();
    let mut current = String::new();
    for seg in segments(path) {
        current.push('/');
        current.push_str(seg);
        result.push((current.clone(), seg));
    }
    result
}
