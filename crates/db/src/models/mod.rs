//! Database entity models.
//!
//! The product model itself lives in `catalog_core::product` because the
//! client crate shares it; only server-side-only rows live here.

pub mod user;
