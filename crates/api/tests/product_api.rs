//! HTTP-level integration tests for product CRUD and role enforcement.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::SqlitePool;

use catalog_core::product::{ProductInput, ProductStatus};
use catalog_db::repositories::ProductRepo;

fn widget_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Widget",
        "price": 9.99,
        "stock": 5,
        "status": "ACTIVE",
    })
}

async fn seed_product(pool: &SqlitePool, name: &str, status: ProductStatus) -> i64 {
    let product = ProductRepo::create(
        pool,
        &ProductInput {
            name: name.to_string(),
            price: 10.0,
            stock: 3,
            status,
        },
    )
    .await
    .expect("seed insert should succeed");
    product.id
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Admins can create products; the response is 201 with the stored row.
#[sqlx::test(migrations = "../db/migrations")]
async fn admin_can_create_product(pool: SqlitePool) {
    let token = common::admin_token(&pool, common::build_test_app(pool.clone())).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/products",
        &token,
        widget_json(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Widget");
    assert_eq!(json["price"], 9.99);
    assert_eq!(json["stock"], 5);
    assert_eq!(json["status"], "ACTIVE");
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
}

/// Non-admin users get 403 and the store is left untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn user_cannot_create_product(pool: SqlitePool) {
    let token = common::user_token(&pool, common::build_test_app(pool.clone())).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/products",
        &token,
        widget_json(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let count = ProductRepo::count(&pool).await.unwrap();
    assert_eq!(count, 0, "rejected mutation must not modify the store");
}

/// Invalid payloads are rejected with 400 and a per-field error map.
#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_payload_returns_field_errors(pool: SqlitePool) {
    let token = common::admin_token(&pool, common::build_test_app(pool.clone())).await;

    let body = serde_json::json!({
        "name": "   ",
        "price": -1.0,
        "stock": -5,
        "status": "ACTIVE",
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/products",
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["errors"]["name"].is_string());
    assert!(json["errors"]["price"].is_string());
    assert!(json["errors"]["stock"].is_string());

    let count = ProductRepo::count(&pool).await.unwrap();
    assert_eq!(count, 0);
}

/// A structurally invalid payload (missing field) is a 400 with the
/// standard error body, not a bare 422.
#[sqlx::test(migrations = "../db/migrations")]
async fn missing_field_payload_returns_400(pool: SqlitePool) {
    let token = common::admin_token(&pool, common::build_test_app(pool.clone())).await;

    let body = serde_json::json!({
        "name": "Widget",
        "status": "ACTIVE",
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/products",
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());

    let count = ProductRepo::count(&pool).await.unwrap();
    assert_eq!(count, 0);
}

/// Product names are stored trimmed.
#[sqlx::test(migrations = "../db/migrations")]
async fn created_name_is_trimmed(pool: SqlitePool) {
    let token = common::admin_token(&pool, common::build_test_app(pool.clone())).await;

    let body = serde_json::json!({
        "name": "  Spaced Out  ",
        "price": 1.50,
        "stock": 1,
        "status": "ACTIVE",
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/products",
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Spaced Out");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// GET by id returns the product for any authenticated user.
#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_returns_product(pool: SqlitePool) {
    let id = seed_product(&pool, "Gadget", ProductStatus::Active).await;
    let token = common::user_token(&pool, common::build_test_app(pool.clone())).await;

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/products/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Gadget");
}

/// GET for a missing id returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_product_returns_404(pool: SqlitePool) {
    let token = common::user_token(&pool, common::build_test_app(pool.clone())).await;

    let response = get_auth(common::build_test_app(pool), "/api/products/9999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Update is a full replace of all four mutable fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_replaces_all_fields(pool: SqlitePool) {
    let id = seed_product(&pool, "Before", ProductStatus::Active).await;
    let token = common::admin_token(&pool, common::build_test_app(pool.clone())).await;

    let body = serde_json::json!({
        "name": "After",
        "price": 42.00,
        "stock": 7,
        "status": "DISCONTINUED",
    });
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/products/{id}"),
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "After");
    assert_eq!(json["price"], 42.0);
    assert_eq!(json["stock"], 7);
    assert_eq!(json["status"], "DISCONTINUED");

    // Immediately visible to subsequent reads.
    let stored = ProductRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.name, "After");
    assert_eq!(stored.status, ProductStatus::Discontinued);
}

/// Updating a missing product returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_product_returns_404(pool: SqlitePool) {
    let token = common::admin_token(&pool, common::build_test_app(pool.clone())).await;

    let response = put_json_auth(
        common::build_test_app(pool),
        "/api/products/9999",
        &token,
        widget_json(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Reactivating a discontinued product is rejected with 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn reactivating_discontinued_product_returns_409(pool: SqlitePool) {
    let id = seed_product(&pool, "Legacy Gizmo", ProductStatus::Discontinued).await;
    let token = common::admin_token(&pool, common::build_test_app(pool.clone())).await;

    let body = serde_json::json!({
        "name": "Legacy Gizmo",
        "price": 10.0,
        "stock": 3,
        "status": "ACTIVE",
    });
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/products/{id}"),
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The row is unchanged.
    let stored = ProductRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.status, ProductStatus::Discontinued);
}

/// Non-admin users cannot update.
#[sqlx::test(migrations = "../db/migrations")]
async fn user_cannot_update_product(pool: SqlitePool) {
    let id = seed_product(&pool, "Untouchable", ProductStatus::Active).await;
    let token = common::user_token(&pool, common::build_test_app(pool.clone())).await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/products/{id}"),
        &token,
        widget_json(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let stored = ProductRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Untouchable");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Delete removes the row and returns 204; subsequent reads see 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_product(pool: SqlitePool) {
    let id = seed_product(&pool, "Doomed", ProductStatus::Active).await;
    let token = common::admin_token(&pool, common::build_test_app(pool.clone())).await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/products/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/products/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting a missing product returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_missing_product_returns_404(pool: SqlitePool) {
    let token = common::admin_token(&pool, common::build_test_app(pool.clone())).await;

    let response = delete_auth(common::build_test_app(pool), "/api/products/9999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Non-admin users cannot delete.
#[sqlx::test(migrations = "../db/migrations")]
async fn user_cannot_delete_product(pool: SqlitePool) {
    let id = seed_product(&pool, "Protected", ProductStatus::Active).await;
    let token = common::user_token(&pool, common::build_test_app(pool.clone())).await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/products/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    assert!(ProductRepo::find_by_id(&pool, id).await.unwrap().is_some());
}
