use thiserror::Error;

/// 服务器级错误 - 启动和运行阶段
///
/// 请求处理阶段的错误见 [`crate::utils::AppError`]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Startup failed: {0}")]
    Startup(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<crate::utils::AppError> for ServerError {
    fn from(err: crate::utils::AppError) -> Self {
        ServerError::Startup(err.to_string())
    }
}

/// 处理器的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
