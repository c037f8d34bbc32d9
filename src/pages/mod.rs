//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod product_detail;
pub mod products;

pub use dashboard::Dashboard;
pub use product_detail::ProductDetail;
pub use products::Products;
