use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

/// A catalog record.
///
/// `category` is kept exactly as seeded; comparisons go through
/// [`Product::in_category`], which ignores case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in smallest currency unit (e.g., cents).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category: category.into(),
            description: None,
            price: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    /// Case-insensitive category match.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Check the per-record rules (positive id, non-blank name and category).
    pub fn validate(&self) -> DomainResult<()> {
        if !self.id.is_valid() {
            return Err(DomainError::invalid_id("product id must be positive"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {} has a blank name",
                self.id
            )));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {} has a blank category",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_match_ignores_case() {
        let product = Product::new(1, "Dune", "Books");
        assert!(product.in_category("books"));
        assert!(product.in_category("BOOKS"));
        assert!(!product.in_category("book"));
    }

    #[test]
    fn validate_rejects_zero_id() {
        let err = Product::new(0, "Dune", "Books").validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let err = Product::new(1, "   ", "Books").validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = Product::new(1, "Dune", "").validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(Product::new(3, "Lamp", "Home")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "Lamp", "category": "Home"})
        );

        let json = serde_json::to_value(
            Product::new(3, "Lamp", "Home")
                .with_price(1999)
                .with_description("Desk lamp"),
        )
        .unwrap();
        assert_eq!(json["price"], 1999);
        assert_eq!(json["description"], "Desk lamp");
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": 9, "name": "Atlas", "category": "Books"}"#).unwrap();
        assert_eq!(product, Product::new(9, "Atlas", "Books"));
    }
}
