//! Database Models
//!
//! SurrealDB table models and their API request/response types.

pub mod order;
pub mod product;
pub mod serde_helpers;
pub mod user;

pub use order::{LineItem, Order, OrderCreate, OrderResponse, OrderStatus};
pub use product::{Product, ProductCreate, ProductResponse, ProductUpdate};
pub use user::{User, UserCreate};
