//! Route definitions.
//!
//! ```text
//! /health                         liveness (public)
//!
//! /api/auth/login                 login (public)
//!
//! /api/products                   list (auth), create (admin)
//! /api/products/paged             paginated/filtered listing (auth)
//! /api/products/{id}              get (auth), update, delete (admin)
//! ```

pub mod auth;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/products", products::router())
}
