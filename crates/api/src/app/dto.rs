use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Welcome to the Product Catalog API!";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const ROUTE_NOT_FOUND: &str = "Not found";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

// -------------------------
// Request DTOs
// -------------------------

/// Query parameters of `GET /products`.
///
/// Built from raw key/value pairs so a repeated or unknown key never rejects
/// the request; the first `category` wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

impl ListProductsQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let category = pairs
            .into_iter()
            .find(|(key, _)| key == "category")
            .map(|(_, value)| value);
        Self { category }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
