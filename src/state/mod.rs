//! State Management
//!
//! Reactive view-model state for the admin pages.

pub mod products;

pub use products::{Product, ProductsState};
