use tower_http::cors::{Any, CorsLayer};

use crate::server::error::AppError;

/// HTTP client used for forwarding.
///
/// Redirects are not followed so a redirect from the backend reaches the
/// browser unchanged.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// The client sends a bearer token rather than cookies, so any origin may call
/// the forwarded API.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
