//! # ZooRepository
//!
//! リソースをまたぐ操作（データベース全体のリセット）を担当する。

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{error::InfraError, procedure::call_reset};

/// 動物園全体に対する操作
#[async_trait]
pub trait ZooRepository: Send + Sync {
    /// 全テーブルを初期データの状態に戻す
    ///
    /// 何度呼んでも同じ状態になる。
    async fn reset(&self) -> Result<(), InfraError>;
}

/// PostgreSQL 実装の ZooRepository
#[derive(Debug, Clone)]
pub struct PostgresZooRepository {
    pool: PgPool,
}

impl PostgresZooRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ZooRepository for PostgresZooRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn reset(&self) -> Result<(), InfraError> {
        call_reset(&self.pool).await
    }
}
