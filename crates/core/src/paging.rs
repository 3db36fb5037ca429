//! Paginated query contract: page bounds, sort whitelist, result envelope.
//!
//! The sort specification is parsed from the wire format
//! `"field,asc"` (multiple fields separated by `;`). Unknown fields are
//! silently skipped so a stale client cannot inject arbitrary `ORDER BY`
//! text; if nothing valid remains the order falls back to `id ASC`. Every
//! rendered order ends with an `id ASC` tie-break so repeated identical
//! queries against an unchanged store return identical pages.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Inclusive page size bounds.
pub const MIN_PAGE_SIZE: i64 = 1;
pub const MAX_PAGE_SIZE: i64 = 200;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Sortable columns. Doubles as the whitelist for the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Price,
    Stock,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Parse a wire-format field name. Accepts the camelCase spellings
    /// the original API used for the timestamp columns.
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "stock" => Some(Self::Stock),
            "status" => Some(Self::Status),
            "createdAt" | "created_at" => Some(Self::CreatedAt),
            "updatedAt" | "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    /// Column name as it appears in SQL.
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Price => "price",
            Self::Stock => "stock",
            Self::Status => "status",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Validated multi-field sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    orders: Vec<(SortField, SortDirection)>,
}

impl Default for SortSpec {
    /// Insertion order: `id ASC`.
    fn default() -> Self {
        Self { orders: Vec::new() }
    }
}

impl SortSpec {
    /// Parse a sort string such as `"price,desc"` or `"name,asc;price,desc"`.
    ///
    /// Fields not in the whitelist are skipped. Any direction other than
    /// `desc` (case-insensitive) is treated as ascending. A blank string
    /// yields the default order.
    pub fn parse(raw: &str) -> Self {
        let mut orders = Vec::new();
        for token in raw.split(';') {
            let mut parts = token.trim().splitn(2, ',');
            let Some(field) = parts.next().map(str::trim).and_then(SortField::parse) else {
                continue;
            };
            let direction = match parts.next().map(str::trim) {
                Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
                _ => SortDirection::Asc,
            };
            orders.push((field, direction));
        }
        Self { orders }
    }

    /// Render the `ORDER BY` clause body.
    ///
    /// `id ASC` is always appended as the final comparator unless `id`
    /// already appears, so ties on any sort key break deterministically.
    pub fn to_order_by(&self) -> String {
        let mut clauses: Vec<String> = self
            .orders
            .iter()
            .map(|(field, dir)| format!("{} {}", field.column(), dir.keyword()))
            .collect();
        if !self.orders.iter().any(|(field, _)| *field == SortField::Id) {
            clauses.push("id ASC".to_string());
        }
        clauses.join(", ")
    }
}

/// Validated pagination + sort parameters for a listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    page: i64,
    size: i64,
    sort: SortSpec,
}

impl PageQuery {
    /// Build a page query, rejecting out-of-bounds parameters.
    pub fn new(page: i64, size: i64, sort: SortSpec) -> Result<Self, CoreError> {
        if page < 0 {
            return Err(CoreError::InvalidQuery(format!(
                "Page index must be >= 0, got: {page}"
            )));
        }
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
            return Err(CoreError::InvalidQuery(format!(
                "Page size must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}, got: {size}"
            )));
        }
        Ok(Self { page, size, sort })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn offset(&self) -> i64 {
        self.page * self.size
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: SortSpec::default(),
        }
    }
}

/// One page of filtered/sorted results plus the total count of the
/// unsliced filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_elements: i64,
    pub page: i64,
    pub size: i64,
}

impl<T> PageResult<T> {
    pub fn total_pages(&self) -> i64 {
        if self.size == 0 {
            return 0;
        }
        (self.total_elements + self.size - 1) / self.size
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }
}
