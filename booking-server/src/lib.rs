//! Booking Server - experience-booking marketplace backend
//!
//! # 模块结构
//!
//! ```text
//! booking-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (模型、仓储、种子数据)
//! └── utils/         # 工具函数 (错误、日志)
//! ```
//!
//! # 核心流程
//!
//! - **Experience store** (`db`): 体验元数据 + 日期→时段的剩余容量映射
//! - **Booking writer** (`api::bookings`): 扣减时段容量并写入预订记录
//! - **Promo validator** (`api::promo_codes`): 优惠码查询 (百分比/固定金额)

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};
pub use crate::utils::logger::init_logger;

/// 设置进程环境 (dotenv, 日志)
///
/// 必须在加载配置和初始化状态之前调用
pub fn setup_environment() -> anyhow::Result<()> {
    // .env 文件可选，缺失时静默忽略
    dotenvy::dotenv().ok();

    utils::logger::init_logger();

    Ok(())
}
