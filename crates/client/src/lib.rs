//! Catalog API client and view-state.
//!
//! The crate is split along the seam between I/O and logic: [`api`]
//! defines the [`api::CatalogApi`] trait and [`http`] implements it over
//! reqwest, while [`debounce`] and [`view`] hold the pure state machines
//! that keep the rendered page consistent with the server.

pub mod api;
pub mod debounce;
pub mod error;
pub mod form;
pub mod http;
pub mod session;
pub mod view;
