//! UI Components
//!
//! Reusable Leptos components for the admin views.

pub mod loading;
pub mod nav;
pub mod product_card;

pub use loading::Loading;
pub use nav::Nav;
pub use product_card::ProductCard;
