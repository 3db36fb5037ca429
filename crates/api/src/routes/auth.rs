use axum::{routing::post, Router};

use crate::handlers::auth;
use crate::state::AppState;

/// Mount auth routes (intended for `/api/auth`).
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}
