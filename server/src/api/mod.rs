//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查接口
//! - [`auth`] - 注册/登录接口
//! - [`products`] - 商品目录接口
//! - [`orders`] - 订单接口

pub mod auth;
pub mod health;
pub mod orders;
pub mod products;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
