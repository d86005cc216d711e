//! State shared by the request handlers.

use url::Url;

/// Cloned into each handler through axum's state extraction. Both fields are
/// cheap to clone, `reqwest::Client` is reference counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Client used to forward requests to the backend.
    pub http_client: reqwest::Client,

    /// Base URL of the grading backend.
    pub backend_url: Url,
}

impl AppState {
    pub fn new(http_client: reqwest::Client, backend_url: Url) -> Self {
        Self {
            http_client,
            backend_url,
        }
    }
}
