pub const SITE_NAME: &str = "SnapCode";

/// Base URL of the grading backend, fixed at build time.
///
/// Empty means same origin, which is what the `server` host serves.
pub const API_BASE_URL: &str = match option_env!("SNAPCODE_API_URL") {
    Some(url) => url,
    None => "",
};

/// Joins `path` onto `base` with exactly one slash between them.
pub fn endpoint(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Absolute or same-origin URL for a backend path such as `/api/v1/auth/login`.
pub fn api_url(path: &str) -> String {
    endpoint(API_BASE_URL, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        assert_eq!(
            endpoint("http://localhost:8000", "/api/v1/auth/login"),
            "http://localhost:8000/api/v1/auth/login"
        );
        assert_eq!(
            endpoint("http://localhost:8000/", "api/v1/auth/login"),
            "http://localhost:8000/api/v1/auth/login"
        );
    }

    #[test]
    fn empty_base_is_same_origin() {
        assert_eq!(endpoint("", "/api/v1/submissions/me"), "/api/v1/submissions/me");
    }
}
