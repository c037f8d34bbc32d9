//! Product Listing State
//!
//! Reactive view-model for the product listing page, plus the row chunking
//! used to lay products out in a grid.

use leptos::*;

/// Products rendered per grid row
const PRODUCTS_PER_ROW: usize = 5;

/// A product as returned by the Dairycart API.
///
/// The shape is server-owned; nothing is validated here beyond what serde
/// needs to decode it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub price: f64,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
    #[serde(default)]
    pub quantity: i64,
}

/// Per-instance state for the product listing page.
///
/// `RwSignal` is `Copy`, so the whole struct is; the fetch callback captures
/// it by value and both the success and failure paths settle the same
/// instance the view reads from.
#[derive(Clone, Copy)]
pub struct ProductsState {
    /// True until the fetch settles, success or failure
    pub loading: RwSignal<bool>,
    /// Chunked product rows, empty until loaded
    pub products: RwSignal<Vec<Vec<Product>>>,
    /// Failure detail from the fetch, if any
    pub error: RwSignal<Option<String>>,
}

impl ProductsState {
    pub fn new() -> Self {
        Self {
            loading: create_rw_signal(true),
            products: create_rw_signal(Vec::new()),
            error: create_rw_signal(None),
        }
    }

    /// Settle the state with the outcome of the product fetch.
    ///
    /// `Loading -> Loaded` on success, `Loading -> Errored` on failure. Both
    /// are terminal; the page never re-fetches on its own.
    pub fn resolve(&self, result: Result<Vec<Product>, String>) {
        match result {
            Ok(list) => {
                self.products.set(split_into_rows(list));
                self.loading.set(false);
            }
            Err(e) => {
                self.loading.set(false);
                self.error.set(Some(e));
            }
        }
    }
}

impl Default for ProductsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Partition `items` into rows of at most [`PRODUCTS_PER_ROW`], preserving order.
///
/// The row in progress is flushed lazily, just before the push that would
/// overfill it, and the trailing row is always appended. Two boundary cases
/// follow from that: an empty input produces one empty row, and an input
/// whose length is an exact multiple of the row size produces only full rows.
/// Pinned by the tests below; see DESIGN.md before changing the boundary rule.
pub fn split_into_rows<T>(items: Vec<T>) -> Vec<Vec<T>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    for item in items {
        if row.len() == PRODUCTS_PER_ROW {
            rows.push(row);
            row = Vec::new();
        }
        row.push(item);
    }
    rows.push(row);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str) -> Product {
        Product {
            sku: sku.to_string(),
            name: format!("Product {}", sku),
            price: 12.34,
            image_url: String::new(),
            quantity: 1,
        }
    }

    #[test]
    fn test_split_twelve_items_into_three_rows() {
        let rows = split_into_rows((1..=12).collect::<Vec<_>>());
        assert_eq!(
            rows,
            vec![vec![1, 2, 3, 4, 5], vec![6, 7, 8, 9, 10], vec![11, 12]]
        );
    }

    #[test]
    fn test_split_empty_input_yields_one_empty_row() {
        let rows = split_into_rows(Vec::<i32>::new());
        assert_eq!(rows, vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_split_exact_multiple_yields_only_full_rows() {
        let rows = split_into_rows((1..=5).collect::<Vec<_>>());
        assert_eq!(rows, vec![vec![1, 2, 3, 4, 5]]);

        let rows = split_into_rows((1..=10).collect::<Vec<_>>());
        assert_eq!(rows, vec![vec![1, 2, 3, 4, 5], vec![6, 7, 8, 9, 10]]);
    }

    #[test]
    fn test_split_preserves_order_and_fills_non_last_rows() {
        for n in 1..=23usize {
            let input: Vec<usize> = (0..n).collect();
            let rows = split_into_rows(input.clone());

            let flattened: Vec<usize> = rows.iter().flatten().copied().collect();
            assert_eq!(flattened, input);

            for row in &rows[..rows.len() - 1] {
                assert_eq!(row.len(), PRODUCTS_PER_ROW, "non-last row must be full (n={})", n);
            }
            assert!(rows.last().unwrap().len() <= PRODUCTS_PER_ROW);
        }
    }

    #[test]
    fn test_resolve_success_settles_loading_and_chunks() {
        let runtime = create_runtime();

        let state = ProductsState::new();
        assert!(state.loading.get_untracked());
        assert!(state.products.get_untracked().is_empty());

        let list: Vec<Product> = (1..=7).map(|i| product(&format!("sku-{}", i))).collect();
        state.resolve(Ok(list.clone()));

        assert!(!state.loading.get_untracked());
        assert!(state.error.get_untracked().is_none());

        let rows = state.products.get_untracked();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 5);
        assert_eq!(rows[1].len(), 2);
        assert_eq!(rows[0][0], list[0]);

        runtime.dispose();
    }

    #[test]
    fn test_resolve_failure_settles_loading_and_sets_error() {
        let runtime = create_runtime();

        let state = ProductsState::new();
        state.resolve(Err("Network error: connection refused".to_string()));

        assert!(!state.loading.get_untracked());
        assert_eq!(
            state.error.get_untracked().as_deref(),
            Some("Network error: connection refused")
        );
        assert!(state.products.get_untracked().is_empty());

        runtime.dispose();
    }

    // The fetch callback captures the state by value; the copy must settle
    // the same signals the original reads, on the error path in particular.
    #[test]
    fn test_failure_handler_updates_the_capturing_instance() {
        let runtime = create_runtime();

        let state = ProductsState::new();
        let handler = move |result| state.resolve(result);
        handler(Err("Parse error: invalid JSON".to_string()));

        assert!(!state.loading.get_untracked());
        assert!(state.error.get_untracked().is_some());

        runtime.dispose();
    }

    #[test]
    fn test_product_decodes_api_field_names() {
        let body = r#"{
            "sku": "t-shirt-small",
            "name": "T-Shirt (Small)",
            "price": 19.99,
            "imageURL": "https://example.com/t-shirt.png",
            "quantity": 666
        }"#;

        let p: Product = serde_json::from_str(body).unwrap();
        assert_eq!(p.sku, "t-shirt-small");
        assert_eq!(p.image_url, "https://example.com/t-shirt.png");
        assert_eq!(p.quantity, 666);
    }

    #[test]
    fn test_product_tolerates_missing_optional_fields() {
        let body = r#"{"sku": "bare", "name": "Bare", "price": 1.0}"#;

        let p: Product = serde_json::from_str(body).unwrap();
        assert_eq!(p.image_url, "");
        assert_eq!(p.quantity, 0);
    }
}
