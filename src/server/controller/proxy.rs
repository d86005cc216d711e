use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, HeaderName, Method},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::server::{error::AppError, state::AppState};

/// Headers that only describe a single connection and must not be relayed.
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Forwards `/api/v1/{*path}` to the same path on the backend.
///
/// Method, query string, body and end-to-end headers (including
/// `Authorization` and `Content-Type`) are passed through, and the backend's
/// status, headers and body are relayed back. An unreachable backend results
/// in a 502.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let url = target_url(&state.backend_url, &path, query.as_deref())?;

    let response = state
        .http_client
        .request(method, url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let response_headers = forwardable_headers(response.headers());
    let bytes = response.bytes().await?;

    Ok((status, response_headers, bytes).into_response())
}

/// `{backend}/api/v1/{path}?{query}`, keeping any path prefix of the backend URL.
fn target_url(backend: &Url, path: &str, query: Option<&str>) -> Result<Url, AppError> {
    if path.split('/').any(|segment| segment == "..") {
        return Err(AppError::BadRequest("Invalid path".to_string()));
    }

    let mut url = backend.clone();
    let prefix = backend.path().trim_end_matches('/');
    url.set_path(&format!("{}/api/v1/{}", prefix, path.trim_start_matches('/')));
    url.set_query(query.filter(|query| !query.is_empty()));

    Ok(url)
}

/// Drops hop-by-hop headers and the ones the HTTP client sets on its own.
fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut forwarded = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || *name == header::HOST || *name == header::CONTENT_LENGTH {
            continue;
        }
        forwarded.append(name.clone(), value.clone());
    }
    forwarded
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    fn backend(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn builds_backend_url_with_query() {
        let url = target_url(
            &backend("http://localhost:8000"),
            "admin/users",
            Some("page=2"),
        )
        .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/admin/users?page=2");
    }

    #[test]
    fn keeps_backend_path_prefix() {
        let url = target_url(&backend("https://grader.example.com/snap/"), "auth/login", None).unwrap();
        assert_eq!(url.as_str(), "https://grader.example.com/snap/api/v1/auth/login");

        let url = target_url(&backend("https://grader.example.com"), "submissions/3", Some("")).unwrap();
        assert_eq!(url.as_str(), "https://grader.example.com/api/v1/submissions/3");
    }

    #[test]
    fn rejects_parent_segments() {
        let result = target_url(&backend("http://localhost:8000"), "../secret", None);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn strips_hop_by_hop_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("bearer abc"));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8080"));
        headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));

        let forwarded = forwardable_headers(&headers);

        assert_eq!(forwarded.len(), 2);
        assert_eq!(forwarded[header::AUTHORIZATION], "bearer abc");
        assert_eq!(forwarded[header::CONTENT_TYPE], "application/json");
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_bad_gateway() {
        let state = AppState::new(reqwest::Client::new(), backend("http://127.0.0.1:1"));

        let result = forward(
            State(state),
            Method::GET,
            Path("auth/me".to_string()),
            RawQuery(None),
            HeaderMap::new(),
            Bytes::new(),
        )
        .await;

        let response = match result {
            Ok(_) => panic!("request to a closed port succeeded"),
            Err(err) => err.into_response(),
        };
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
