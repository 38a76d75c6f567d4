//! Helpers for project-relative paths.
//!
//! Relative paths are plain strings using `/` as separator. Input may use
//! `\` as well; comparisons ignore case the way the host filesystem does.

use std::path::{Component, Path, PathBuf};

pub const SEPARATOR: char = '/';

/// Replace `\` with `/`.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Key used for case-insensitive set membership.
pub fn fold(path: &str) -> String {
    normalize_separators(path).to_lowercase()
}

pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn starts_with_ignore_case(path: &str, prefix: &str) -> bool {
    fold(path).starts_with(&fold(prefix))
}

/// Appends a separator unless one is already there.
pub fn ensure_trailing_separator(path: &str) -> String {
    let mut path = normalize_separators(path);
    if !path.ends_with(SEPARATOR) {
        path.push(SEPARATOR);
    }
    path
}

/// Final segment of a relative path.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Extension of the final segment including the dot, e.g. `.cs`.
pub fn extension(path: &str) -> Option<&str> {
    let name = file_name(path);
    name.rfind('.').map(|idx| &name[idx..]).filter(|ext| ext.len() > 1)
}

/// Final segment without its extension.
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

pub fn join(base: &str, relative: &str) -> String {
    let base = normalize_separators(base);
    let relative = normalize_separators(relative);
    let base = base.trim_end_matches(SEPARATOR);
    let relative = relative.trim_start_matches(SEPARATOR);
    match (base.is_empty(), relative.is_empty()) {
        (true, _) => relative.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{base}{SEPARATOR}{relative}"),
    }
}

/// Generic path cleanup applied to every resolved path: unify separators,
/// trim whitespace, drop empty and `.` segments.
pub fn normalize(path: &str) -> String {
    normalize_separators(path.trim())
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Absolute location of `path`, which may already be absolute or be relative
/// to `root`. `.` and `..` components are resolved lexically.
pub fn absolute(root: &Path, path: &str) -> PathBuf {
    let candidate = Path::new(path);
    let joined = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        normalize(path)
            .split(SEPARATOR)
            .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
    };

    let mut components = Vec::new();
    for component in joined.components() {
        match component {
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            Component::CurDir => {}
            c => components.push(c),
        }
    }
    components.iter().collect()
}
