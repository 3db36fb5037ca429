//! Well-known role name constants.
//!
//! These must match the `role` column values seeded into the `users`
//! table. ADMIN has full CRUD on the catalog; USER is read-only.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_USER: &str = "USER";
