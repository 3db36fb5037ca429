//! Domain types and contracts for the product catalog.
//!
//! This crate is free of I/O: it defines the product model and its
//! validation rules, the paginated query contract (sort whitelist, page
//! bounds, page result envelope), role constants, and the domain error
//! taxonomy shared by the server and client crates.

pub mod error;
pub mod paging;
pub mod product;
pub mod roles;
pub mod types;
