//! Repository for the `products` table, including the paginated search
//! query that backs the `/api/products/paged` endpoint.

use catalog_core::paging::{PageQuery, PageResult};
use catalog_core::product::{Product, ProductInput, ProductStatus};
use catalog_core::types::DbId;

use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, stock, status, created_at, updated_at";

/// Escape LIKE wildcards in a user-supplied search term so it matches
/// literally. Paired with `ESCAPE '\'` in the query text.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Provides CRUD and paginated search over products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// The caller is responsible for validating and normalizing `input`
    /// beforehand.
    pub async fn create(pool: &DbPool, input: &ProductInput) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, price, stock, status)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.stock)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = ?");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products in insertion order. Legacy unpaginated surface.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id ASC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Full replace of the four mutable fields. Not a partial patch.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &ProductInput,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = ?,
                price = ?,
                stock = ?,
                status = ?,
                updated_at = STRFTIME('%Y-%m-%d %H:%M:%f', 'now')
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.stock)
            .bind(input.status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of products, ignoring any filter.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await
    }

    /// Paginated search.
    ///
    /// A non-blank `term` matches product names case-insensitively as a
    /// substring; `status` filters by exact match; the two compose with
    /// AND. `total_elements` counts the fully filtered set, and a page
    /// index beyond the available range yields an empty item list rather
    /// than an error. The `ORDER BY` rendered from the query's sort spec
    /// always ends in `id ASC`, so identical calls against an unchanged
    /// table return identical pages.
    pub async fn search_page(
        pool: &DbPool,
        term: Option<&str>,
        status: Option<ProductStatus>,
        page: &PageQuery,
    ) -> Result<PageResult<Product>, sqlx::Error> {
        let term = term.map(str::trim).filter(|t| !t.is_empty());

        // Build dynamic WHERE clauses.
        let mut conditions: Vec<&str> = Vec::new();
        if term.is_some() {
            conditions.push("LOWER(name) LIKE ? ESCAPE '\\'");
        }
        if status.is_some() {
            conditions.push("status = ?");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let pattern = term.map(|t| format!("%{}%", escape_like(&t.to_lowercase())));

        tracing::debug!(
            term = ?term,
            status = ?status,
            page = page.page(),
            size = page.size(),
            "Executing paged product search"
        );

        let count_query = format!("SELECT COUNT(*) FROM products {where_clause}");
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(pattern) = &pattern {
            count = count.bind(pattern);
        }
        if let Some(status) = status {
            count = count.bind(status);
        }
        let total_elements = count.fetch_one(pool).await?;

        let items_query = format!(
            "SELECT {COLUMNS} FROM products {where_clause}
             ORDER BY {}
             LIMIT ? OFFSET ?",
            page.sort().to_order_by()
        );
        let mut items = sqlx::query_as::<_, Product>(&items_query);
        if let Some(pattern) = &pattern {
            items = items.bind(pattern);
        }
        if let Some(status) = status {
            items = items.bind(status);
        }
        let items = items
            .bind(page.size())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        Ok(PageResult {
            items,
            total_elements,
            page: page.page(),
            size: page.size(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%_off\\"), "100\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
