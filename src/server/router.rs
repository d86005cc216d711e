use axum::{routing::any, Router};

use crate::server::{controller::proxy::forward, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/{*path}", any(forward))
}
