//! Order Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use surrealdb::RecordId;

/// Order ID type
pub type OrderId = RecordId;

/// Order status enum
///
/// A closed enumeration: unrecognized status strings are rejected at the
/// boundary instead of falling through to a catch-all sort bucket.
/// Transition rules live in [`crate::orders`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    New,
    Shipped,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::New => "New",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        };
        f.write_str(s)
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(OrderStatus::New),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            _ => Err(()),
        }
    }
}

/// Line item snapshot captured at order-creation time
///
/// Immutable after creation — later catalog edits do not touch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: i32,
}

/// Order model matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<OrderId>,
    /// Weak reference to the owning user ("user:xyz"), no cascading delete
    pub user_id: String,
    pub items: Vec<LineItem>,
    /// Client-supplied total, validated at the boundary but not recomputed
    pub total: f64,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub items: Vec<LineItem>,
    pub total: f64,
}

/// Order response for clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            user_id: o.user_id,
            items: o.items,
            total: o.total,
            date: o.date,
            status: o.status,
        }
    }
}
