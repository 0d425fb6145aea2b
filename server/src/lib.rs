//! Shop Server - 小型电商后端
//!
//! # 架构概述
//!
//! 本模块是 Shop Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (用户、商品、订单)
//! - **认证** (`auth`): JWT + Argon2 认证体系，首个注册用户为管理员
//! - **HTTP API** (`api`): 注册/登录、商品目录、订单接口
//! - **订单工作流** (`orders`): New → Shipped → Delivered 生命周期规则
//!
//! # 模块结构
//!
//! ```text
//! server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、中间件、授权
//! ├── api/           # HTTP 路由和处理器
//! ├── orders/        # 订单工作流规则
//! ├── db/            # 数据库层 (模型 + 仓储)
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState, build_app};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv + 日志)
///
/// 必须在读取 [`Config`] 之前调用，否则 `.env` 里的值不生效。
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present; missing file is fine
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();

    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ __
  / ___// /_  ____  ____
  \__ \/ __ \/ __ \/ __ \
 ___/ / / / / /_/ / /_/ /
/____/_/ /_/\____/ .___/
                /_/
    "#
    );
}
