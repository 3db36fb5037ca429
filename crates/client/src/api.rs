//! The API seam the view-state talks through.
//!
//! [`CatalogApi`] abstracts the HTTP transport so the view-state can be
//! tested against an in-memory implementation.

use async_trait::async_trait;
use catalog_core::paging::PageResult;
use catalog_core::product::{Product, ProductInput, ProductStatus};
use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;

/// Parameters for a paged product listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    /// Free-text search term; `None` or blank means no filter.
    pub term: Option<String>,
    /// Status equality filter.
    pub status: Option<ProductStatus>,
    /// Zero-based page index.
    pub page: i64,
    /// Page size.
    pub size: i64,
    /// Wire-format sort spec, e.g. `"price,asc"`.
    pub sort: Option<String>,
}

/// Credentials for [`CatalogApi::login`].
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Identity returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInfo {
    pub token: String,
    pub username: String,
    pub role: String,
}

/// Operations the catalog backend exposes to this client.
#[async_trait]
pub trait CatalogApi {
    async fn login(&self, credentials: &Credentials) -> ClientResult<LoginInfo>;

    async fn list_paged(&self, query: &ProductQuery) -> ClientResult<PageResult<Product>>;

    async fn get_product(&self, id: DbId) -> ClientResult<Product>;

    async fn create_product(&self, input: &ProductInput) -> ClientResult<Product>;

    async fn update_product(&self, id: DbId, input: &ProductInput) -> ClientResult<Product>;

    async fn delete_product(&self, id: DbId) -> ClientResult<()>;
}
