//! 统一错误处理
//!
//! 提供应用级错误类型 [`AppError`] 及其 HTTP 映射。
//!
//! # 状态码映射
//!
//! | 错误 | 状态码 |
//! |------|--------|
//! | Validation / Invalid | 400 |
//! | Conflict | 400 (沿用前端既有行为，不是 409) |
//! | Unauthorized / TokenExpired / InvalidToken | 401 |
//! | Forbidden | 403 |
//! | NotFound | 404 |
//! | Database / Internal | 500 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Order not found."))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Error body returned to clients: `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// 应用错误枚举
///
/// # 错误分类
///
/// | 分类 | 说明 |
/// |------|------|
/// | 认证错误 | 未登录、令牌过期、无效令牌 |
/// | 业务逻辑错误 | 资源不存在、验证失败、唯一性冲突 |
/// | 系统错误 | 数据库错误、内部错误 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (4xx) ==========
    #[error("Authentication required.")]
    /// 未登录 (401)
    Unauthorized,

    #[error("Token expired. Please log in again.")]
    /// 令牌过期 (401)
    TokenExpired,

    #[error("Invalid token.")]
    /// 无效令牌 (401)
    InvalidToken,

    #[error("{0}")]
    /// 无权限 (403)
    Forbidden(String),

    // ========== 业务逻辑错误 (4xx) ==========
    #[error("{0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("{0}")]
    /// 唯一性冲突 (400)
    Conflict(String),

    #[error("{0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("{0}")]
    /// 无效请求 (400)
    Invalid(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Authentication errors (401)
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, self.to_string()),

            // Authorization errors (403)
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),

            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),

            // Conflict — the storefront expects 400 here, not 409
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            // Validation (400)
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            // Database errors (500)
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error. Please try again later.".to_string(),
                )
            }

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error. Please try again later.".to_string(),
                )
            }
        };

        let body = Json(ErrorBody { message });

        (status, body).into_response()
    }
}

impl From<crate::db::repository::RepoError> for AppError {
    fn from(err: crate::db::repository::RepoError) -> Self {
        use crate::db::repository::RepoError;
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an invalid credentials error with unified message
    /// Used to prevent email enumeration during signin
    pub fn invalid_credentials() -> Self {
        Self::Invalid("Invalid email or password.".to_string())
    }
}
