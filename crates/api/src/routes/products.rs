use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Mount product routes (intended for `/api/products`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route("/paged", get(products::list_paged))
        .route(
            "/{id}",
            get(products::get_by_id)
                .put(products::update)
                .delete(products::delete),
        )
}
