use hp_core::ROOT_PATH;

/// Reduce a requested location to the form the route table is keyed by.
///
/// Query and fragment are dropped, a trailing slash is removed (except on
/// root) and an empty path means root. Case is preserved.
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_PATH
    } else {
        trimmed
    }
}
