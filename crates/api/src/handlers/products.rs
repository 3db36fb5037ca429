//! Handlers for the `/products` resource.
//!
//! Reads require any authenticated user; mutations require the admin
//! role. Mutation handlers validate the payload before touching the
//! store, and every successful mutation is immediately visible to the
//! next listing query -- there is no server-side cache to invalidate.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use catalog_core::error::CoreError;
use catalog_core::paging::{PageQuery, PageResult, SortSpec, DEFAULT_PAGE_SIZE};
use catalog_core::product::{ensure_status_transition, Product, ProductInput, ProductStatus};
use catalog_core::types::DbId;
use catalog_db::repositories::ProductRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Query parameters for `GET /products/paged`.
///
/// Missing or blank optional params mean "no filter".
#[derive(Debug, Deserialize)]
pub struct PagedParams {
    /// Free-text search term, matched against product names.
    pub q: Option<String>,
    /// Status filter; blank is treated as absent.
    pub status: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    /// Sort specification, e.g. `"price,asc"`.
    pub sort: Option<String>,
}

/// GET /api/products
///
/// Legacy unpaginated listing, kept for existing consumers. The paged
/// endpoint is the canonical listing surface.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list_all(&state.pool).await?;
    Ok(Json(products))
}

/// GET /api/products/paged
pub async fn list_paged(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<PagedParams>,
) -> AppResult<Json<PageResult<Product>>> {
    let status: Option<ProductStatus> = params
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .transpose()?;

    let sort = SortSpec::parse(params.sort.as_deref().unwrap_or(""));
    let query = PageQuery::new(
        params.page.unwrap_or(0),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE),
        sort,
    )?;

    let result = ProductRepo::search_page(&state.pool, params.q.as_deref(), status, &query).await?;
    Ok(Json(result))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Json(input): Json<ProductInput>,
) -> AppResult<(StatusCode, Json<Product>)> {
    input.validate()?;
    let product = ProductRepo::create(&state.pool, &input.normalized()).await?;
    tracing::info!(product_id = product.id, user_id = user.user_id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
///
/// Full replace of the four mutable fields. Validation order: payload
/// fields first (400), then existence (404), then the status-transition
/// rule against the stored row (409).
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ProductInput>,
) -> AppResult<Json<Product>> {
    input.validate()?;

    let existing = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    ensure_status_transition(existing.status, input.status)?;

    let product = ProductRepo::update(&state.pool, id, &input.normalized())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    tracing::info!(product_id = id, user_id = user.user_id, "Product updated");
    Ok(Json(product))
}

/// DELETE /api/products/{id}
///
/// Hard delete; there is no soft-delete state in this system.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(product_id = id, user_id = user.user_id, "Product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
    }
}
