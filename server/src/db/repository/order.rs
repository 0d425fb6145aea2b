//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Order, OrderCreate, OrderStatus};
use chrono::Utc;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

// `order` is a reserved word in SurrealQL, hence the plural table name
const ORDER_TABLE: &str = "orders";

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new order, always starting in `New`
    pub async fn create(&self, owner_id: &str, data: OrderCreate) -> RepoResult<Order> {
        let order = Order {
            id: None,
            user_id: owner_id.to_string(),
            items: data.items,
            total: data.total,
            date: Utc::now(),
            status: OrderStatus::New,
        };

        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;

        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select(record_id(ORDER_TABLE, id)).await?;
        Ok(order)
    }

    /// All orders belonging to one user, most recent first
    pub async fn find_by_owner(&self, owner_id: &str) -> RepoResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE user_id = $user_id")
            .bind(("user_id", owner_id.to_string()))
            .await?
            .take(0)?;

        // Sort on the parsed timestamps, not the stored representation
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(orders)
    }

    /// All orders across all users
    ///
    /// The fulfilment-priority sort (pending work first) is a business rule
    /// and lives in [`crate::orders`], not in the query.
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Count all orders
    pub async fn count(&self) -> RepoResult<i64> {
        let row: Option<CountRow> = self
            .base
            .db()
            .query("SELECT count() FROM orders GROUP ALL")
            .await?
            .take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    /// Set an order's status unconditionally (admin path)
    pub async fn set_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let thing = record_id(ORDER_TABLE, id);

        let updated: Vec<Order> = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status RETURN AFTER")
            .bind(("thing", thing))
            .bind(("status", status))
            .await?
            .take(0)?;

        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Flip a shipped order to delivered, atomically
    ///
    /// The status precondition rides inside the update statement, so two
    /// racing confirmations cannot both observe `Shipped`. Returns `None`
    /// when the order was not in `Shipped` (or vanished concurrently).
    pub async fn mark_delivered(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing = record_id(ORDER_TABLE, id);

        let updated: Vec<Order> = self
            .base
            .db()
            .query("UPDATE $thing SET status = 'Delivered' WHERE status = 'Shipped' RETURN AFTER")
            .bind(("thing", thing))
            .await?
            .take(0)?;

        Ok(updated.into_iter().next())
    }
}
