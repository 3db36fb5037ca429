//! Product entity model, mutation payload, and business validation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Maximum length of a product name, in Unicode code points.
pub const MAX_NAME_LEN: usize = 255;

/// Lifecycle status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    Active,
    Discontinued,
}

impl std::str::FromStr for ProductStatus {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "ACTIVE" => Ok(ProductStatus::Active),
            "DISCONTINUED" => Ok(ProductStatus::Discontinued),
            other => Err(CoreError::InvalidQuery(format!(
                "Unknown product status: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Active => f.write_str("ACTIVE"),
            ProductStatus::Discontinued => f.write_str("DISCONTINUED"),
        }
    }
}

/// A row from the `products` table.
///
/// Serialized camelCase on the wire, matching the page envelope.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub status: ProductStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Mutation payload for create and full-replace update.
///
/// Update is not a partial patch: callers must resend all four fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_price"))]
    pub price: f64,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i64,
    pub status: ProductStatus,
}

impl ProductInput {
    /// Copy of the payload with the name trimmed, as it is persisted.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            ..self.clone()
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("name_required").with_message("Name is required".into()));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::new("name_too_long")
            .with_message("Name must be at most 255 characters".into()));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(
            ValidationError::new("price_positive").with_message("Price must be positive".into())
        );
    }
    // Two-fraction-digit currency semantics.
    let cents = price * 100.0;
    if (cents - cents.round()).abs() > 1e-6 {
        return Err(ValidationError::new("price_precision")
            .with_message("Price must have at most two decimal places".into()));
    }
    Ok(())
}

/// Status transitions allowed on update.
///
/// A discontinued product cannot be reactivated; everything else is a
/// plain field replace.
pub fn ensure_status_transition(
    current: ProductStatus,
    requested: ProductStatus,
) -> Result<(), CoreError> {
    if current == ProductStatus::Discontinued && requested == ProductStatus::Active {
        return Err(CoreError::Conflict(
            "Cannot reactivate discontinued product".to_string(),
        ));
    }
    Ok(())
}
