//! Dotted node paths used in error messages, e.g. `from.steps[1].to`

/// Path shown for the document root
pub(crate) const ROOT: &str = "(root)";

pub(crate) fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}
