//! Filename and extension handling for asset paths.

/// Returns the last component of `path`, after the final `/` or `\`.
///
/// A path without separators is returned whole.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Drops everything from the last `.` onward. Names without a dot are unchanged.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}
