//! 存活检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /ping | GET | 返回 "pong" |

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/ping", get(ping))
}

async fn ping() -> &'static str {
    "pong"
}
