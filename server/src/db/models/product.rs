//! Product Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Product ID type
pub type ProductId = RecordId;

/// Default creator attribution for products created without one
fn default_created_by() -> String {
    "shop-server".to_string()
}

/// Product model matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub stock: i64,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub featured: bool,
    pub image: Option<String>,
    #[serde(default = "default_created_by")]
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub stock: i64,
    pub featured: Option<bool>,
    pub image: Option<String>,
    pub created_by: Option<String>,
}

/// Update product payload (all fields optional)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub stock: Option<i64>,
    pub featured: Option<bool>,
    pub image: Option<String>,
}

/// Product response for the storefront
///
/// Carries the derived read-only fields (`isInStock`, `formattedPrice`)
/// the storefront renders directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub stock: i64,
    pub featured: bool,
    pub image: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub is_in_stock: bool,
    pub formatted_price: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            is_in_stock: p.stock > 0,
            formatted_price: format!("Ksh {:.2}", p.price),
            name: p.name,
            price: p.price,
            description: p.description,
            stock: p.stock,
            featured: p.featured,
            image: p.image,
            created_by: p.created_by,
            created_at: p.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(stock: i64, price: f64) -> Product {
        Product {
            id: None,
            name: "Gaming Laptop".to_string(),
            price,
            description: None,
            stock,
            featured: false,
            image: None,
            created_by: default_created_by(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_derived_fields() {
        let resp = ProductResponse::from(sample(3, 1299.9));
        assert!(resp.is_in_stock);
        assert_eq!(resp.formatted_price, "Ksh 1299.90");

        let resp = ProductResponse::from(sample(0, 24.99));
        assert!(!resp.is_in_stock);
        assert_eq!(resp.formatted_price, "Ksh 24.99");
    }
}
