//! HTTP API Client
//!
//! Functions for communicating with the Dairycart REST API.

use gloo_net::http::Request;

use crate::state::Product;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:1234/api/v1";

/// Local storage key holding an API base override, for pointing a deployed
/// bundle at a non-default API host
const API_URL_KEY: &str = "dairycart_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Normalize: remove trailing slash
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

/// Error envelope the API wraps non-2xx responses in
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

// ============ API Functions ============

/// Fetch the full product list
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/products", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string() });
        return Err(error.error);
    }

    let result: ProductListResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slash() {
        assert_eq!(
            normalize_base("http://localhost:1234/api/v1/"),
            "http://localhost:1234/api/v1"
        );
        assert_eq!(
            normalize_base("http://localhost:1234/api/v1"),
            "http://localhost:1234/api/v1"
        );
    }

    #[test]
    fn test_product_list_response_decodes_data_envelope() {
        let body = r#"{
            "data": [
                {
                    "sku": "skateboard",
                    "name": "Skateboard",
                    "price": 99.99,
                    "imageURL": "https://example.com/skateboard.png",
                    "quantity": 123
                }
            ]
        }"#;

        let response: ProductListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].sku, "skateboard");
        assert_eq!(response.data[0].image_url, "https://example.com/skateboard.png");
    }

    #[test]
    fn test_api_error_envelope() {
        let error: ApiError = serde_json::from_str(r#"{"error": "no products found"}"#).unwrap();
        assert_eq!(error.error, "no products found");
    }
}
