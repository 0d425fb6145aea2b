//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use chrono::Utc;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const PRODUCT_TABLE: &str = "product";

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a page of products, newest first, optionally filtered by `featured`
    pub async fn find_page(
        &self,
        page: u64,
        limit: u64,
        featured: Option<bool>,
    ) -> RepoResult<Vec<Product>> {
        let skip = (page.saturating_sub(1)) * limit;

        let query = if featured.is_some() {
            "SELECT * FROM product WHERE featured = $featured ORDER BY created_at DESC LIMIT $limit START $skip"
        } else {
            "SELECT * FROM product ORDER BY created_at DESC LIMIT $limit START $skip"
        };

        let mut q = self
            .base
            .db()
            .query(query)
            .bind(("limit", limit as i64))
            .bind(("skip", skip as i64));
        if let Some(f) = featured {
            q = q.bind(("featured", f));
        }

        let products: Vec<Product> = q.await?.take(0)?;
        Ok(products)
    }

    /// Count products, optionally filtered by `featured`
    pub async fn count(&self, featured: Option<bool>) -> RepoResult<i64> {
        let query = if featured.is_some() {
            "SELECT count() FROM product WHERE featured = $featured GROUP ALL"
        } else {
            "SELECT count() FROM product GROUP ALL"
        };

        let mut q = self.base.db().query(query);
        if let Some(f) = featured {
            q = q.bind(("featured", f));
        }

        let row: Option<CountRow> = q.await?.take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let product: Option<Product> = self.base.db().select(record_id(PRODUCT_TABLE, id)).await?;
        Ok(product)
    }

    /// Create a new product (validation happens at the API boundary)
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let product = Product {
            id: None,
            // Trim before persisting, mirroring the storefront's sanitization
            name: data.name.trim().to_string(),
            price: data.price,
            description: data.description.map(|d| d.trim().to_string()),
            stock: data.stock,
            featured: data.featured.unwrap_or(false),
            image: data.image,
            created_by: data.created_by.unwrap_or_else(|| "shop-server".to_string()),
            created_at: Utc::now(),
        };

        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a product
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let thing = record_id(PRODUCT_TABLE, id);

        // Build dynamic SET clauses with proper type bindings
        let mut set_parts: Vec<&str> = Vec::new();

        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.stock.is_some() {
            set_parts.push("stock = $stock");
        }
        if data.featured.is_some() {
            set_parts.push("featured = $featured");
        }
        if data.image.is_some() {
            set_parts.push("image = $image");
        }

        if set_parts.is_empty() {
            // No fields to update
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self.base.db().query(&query_str).bind(("thing", thing));

        if let Some(v) = data.name {
            query = query.bind(("name", v.trim().to_string()));
        }
        if let Some(v) = data.price {
            query = query.bind(("price", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v.trim().to_string()));
        }
        if let Some(v) = data.stock {
            query = query.bind(("stock", v));
        }
        if let Some(v) = data.featured {
            query = query.bind(("featured", v));
        }
        if let Some(v) = data.image {
            query = query.bind(("image", v));
        }

        let mut result = query.await?;
        let products: Vec<Product> = result.take(0)?;

        products
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let result: Option<Product> = self.base.db().delete(record_id(PRODUCT_TABLE, id)).await?;
        if result.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }
        Ok(())
    }
}
