use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use productapi_core::{DomainResult, Entity};
use productapi_products::{Product, ProductDraft};

// -------------------------
// Request DTOs
// -------------------------

/// Body of create and update requests. Update replaces all three fields.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[schema(example = "Widget", max_length = 100)]
    pub name: String,
    #[schema(example = "A small blue widget", max_length = 500)]
    pub description: Option<String>,
    #[schema(example = 9.99, minimum = 0.0)]
    pub price: f64,
}

impl ProductRequest {
    pub fn into_draft(self) -> DomainResult<ProductDraft> {
        ProductDraft::new(self.name, self.description, self.price)
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id().get(),
            name: product.name().to_string(),
            description: product.description().map(str::to_string),
            price: product.price().amount(),
            created_at: product.created_at(),
            updated_at: product.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    pub api_key: String,
    #[schema(example = "Use this API key in X-API-Key header")]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub docs: String,
}

/// Error body. `message` is omitted on authentication failures.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "not_found")]
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use productapi_core::ProductId;

    #[test]
    fn response_is_a_field_projection_with_camel_case_keys() {
        let now = Utc::now();
        let draft = ProductDraft::new("Widget", Some("blue".to_string()), 9.99).unwrap();
        let product = Product::inserted(ProductId::new(3), draft, now);

        let json = serde_json::to_value(ProductResponse::from(product)).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["description"], "blue");
        assert_eq!(json["price"], 9.99);
        assert_eq!(json["createdAt"], json["updatedAt"]);
    }

    #[test]
    fn request_validation_goes_through_the_draft() {
        let request: ProductRequest =
            serde_json::from_str(r#"{"name": "  ", "price": 1}"#).unwrap();
        assert!(request.into_draft().is_err());

        let request: ProductRequest =
            serde_json::from_str(r#"{"name": "Widget", "price": 1}"#).unwrap();
        let draft = request.into_draft().unwrap();
        assert_eq!(draft.description(), None);
    }

    #[test]
    fn auth_error_body_has_only_the_error_key() {
        let body = ErrorBody {
            error: "Invalid or missing API key".to_string(),
            message: None,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"error": "Invalid or missing API key"})
        );
    }
}
