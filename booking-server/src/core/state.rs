use std::sync::Arc;

use dashmap::DashMap;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::Mutex;

use crate::core::Config;
use crate::db::repository::strip_table_prefix;
use crate::db::{self, DbService};
use crate::utils::AppError;

/// 每个体验一把的预订锁
///
/// 使用 DashMap 实现无锁并发的锁注册表。同一体验的并发预订请求
/// 在同一把 Mutex 上排队，保证时段容量的读-改-写是串行的，
/// 不会出现丢失更新 (两个请求同时通过可用性检查导致超卖)。
///
/// 嵌入式数据库只有本进程一个写入方，进程内互斥即完整的
/// 串行化边界。
#[derive(Debug, Default)]
pub struct SlotLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SlotLocks {
    /// 创建空的锁注册表
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// 获取指定体验的锁，不存在时创建
    ///
    /// id 统一去掉 "experience:" 前缀后作为键，"experience:abc" 和
    /// "abc" 指向同一条记录，必须拿到同一把锁
    pub fn for_experience(&self, experience_id: &str) -> Arc<Mutex<()>> {
        let key = strip_table_prefix("experience", experience_id);
        self.locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

/// 服务器状态 - 持有所有共享资源的单例引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一份，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | slot_locks | Arc<SlotLocks> | 体验级预订锁 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 体验级预订锁注册表
    pub slot_locks: Arc<SlotLocks>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 生产路径使用 [`ServerState::initialize`]；测试场景可以
    /// 传入内存数据库直接构造
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self {
            config,
            db,
            slot_locks: Arc::new(SlotLocks::new()),
        }
    }

    /// 初始化服务器状态
    ///
    /// 显式的启动阶段，在监听端口之前完成：
    /// 1. 打开嵌入式数据库并定义 schema (唯一索引)
    /// 2. 空库时写入种子数据
    ///
    /// 任一步骤失败时返回错误，进程直接退出而不是接受请求
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::open(&config.database_path).await?;

        db::seed::seed_if_empty(&db_service.db).await?;

        tracing::info!("Server state initialized");
        Ok(Self::new(config.clone(), db_service.db))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_experience_shares_a_lock() {
        let locks = SlotLocks::new();
        let a = locks.for_experience("experience:abc");
        let b = locks.for_experience("experience:abc");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn prefixed_and_bare_ids_share_a_lock() {
        let locks = SlotLocks::new();
        let a = locks.for_experience("experience:abc");
        let b = locks.for_experience("abc");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn different_experiences_get_different_locks() {
        let locks = SlotLocks::new();
        let a = locks.for_experience("experience:abc");
        let b = locks.for_experience("experience:def");
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
