//! Explicit edit-form state for create/update dialogs.
//!
//! The form holds raw text exactly as entered; [`ProductForm::validate`]
//! is a pure function that either produces a [`ProductInput`] ready to
//! send or a map of field-level messages to render next to the inputs.
//! There is no hidden binding layer between the two.

use std::collections::BTreeMap;

use catalog_core::product::{ProductInput, ProductStatus, MAX_NAME_LEN};

/// Mutable state of the product edit form.
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub name: String,
    /// Raw price text as typed, parsed on validation.
    pub price: String,
    /// Raw stock text as typed, parsed on validation.
    pub stock: String,
    pub status: ProductStatus,
}

/// Field name -> user-facing message.
pub type FieldErrors = BTreeMap<&'static str, String>;

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            stock: "0".to_string(),
            status: ProductStatus::Active,
        }
    }
}

impl ProductForm {
    /// Pre-fill the form from an existing product for editing.
    pub fn from_input(input: &ProductInput) -> Self {
        Self {
            name: input.name.clone(),
            price: format!("{:.2}", input.price),
            stock: input.stock.to_string(),
            status: input.status,
        }
    }

    /// Validate the form. Returns the payload to submit, or every
    /// field's error at once so the form can show them together.
    pub fn validate(&self) -> Result<ProductInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", "Name is required".to_string());
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.insert("name", "Name must be at most 255 characters".to_string());
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price > 0.0 => {
                let cents = price * 100.0;
                if (cents - cents.round()).abs() > 1e-6 {
                    errors.insert(
                        "price",
                        "Price must have at most two decimal places".to_string(),
                    );
                }
                price
            }
            Ok(_) => {
                errors.insert("price", "Price must be positive".to_string());
                0.0
            }
            Err(_) => {
                errors.insert("price", "Price must be a number".to_string());
                0.0
            }
        };

        let stock = match self.stock.trim().parse::<i64>() {
            Ok(stock) if stock >= 0 => stock,
            Ok(_) => {
                errors.insert("stock", "Stock cannot be negative".to_string());
                0
            }
            Err(_) => {
                errors.insert("stock", "Stock must be a whole number".to_string());
                0
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductInput {
            name: name.to_string(),
            price,
            stock,
            status: self.status,
        })
    }
}
