//! API Layer
//!
//! HTTP client for the Dairycart REST API.

pub mod client;

pub use client::fetch_products;
