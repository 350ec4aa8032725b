//! Path normalisation shared by route registration and resolution.

/// Strips every trailing `/`; an empty remainder becomes `"/"`.
///
/// Idempotent and never returns an empty string. Nothing else about the path
/// is touched, so `"//a//"` normalises to `"//a"`.
///
/// # Examples
///
/// ```
/// use docshell::router::normalize_route;
///
/// assert_eq!(normalize_route("/composition/pipe/"), "/composition/pipe");
/// assert_eq!(normalize_route("///"), "/");
/// assert_eq!(normalize_route(""), "/");
/// ```
#[must_use]
pub fn normalize_route(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
