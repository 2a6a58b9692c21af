use url::Url;

/// Reduces a user supplied redirect target to a path on this site.
///
/// Relative paths are kept and absolute URLs keep only their path and query. Whatever
/// comes out must still be a local path that cannot be read as protocol-relative,
/// otherwise the target falls back to `/`.
pub fn local_redirect_target(target: Option<&str>) -> String {
    let Some(target) = target.map(str::trim).filter(|t| !t.is_empty()) else {
        return "/".to_string();
    };

    let path = if target.starts_with('/') {
        target.to_string()
    } else {
        match Url::parse(target) {
            Ok(url) => match url.query() {
                Some(query) => format!("{}?{}", url.path(), query),
                None => url.path().to_string(),
            },
            Err(_) => return "/".to_string(),
        }
    };

    if is_local_path(&path) {
        path
    } else {
        "/".to_string()
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}
