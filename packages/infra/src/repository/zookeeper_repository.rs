//! # ZookeeperRepository
//!
//! 飼育員の一覧取得と、`sp_*_zookeeper` 手続きによる書き込みを担当する。

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use zoo_domain::{
    ProcedureOutcome,
    ProcedureVerb,
    ResourceKind,
    zookeeper::{KeeperId, Zookeeper, ZookeeperFields},
};

use crate::{
    error::InfraError,
    procedure::{ProcedureCall, call_procedure},
};

const KIND: ResourceKind = ResourceKind::Zookeeper;

const SELECT_ALL_SQL: &str = r#"
    SELECT keeper_id, first_name, last_name, hire_date, speciality
    FROM zookeepers
    ORDER BY
        lower(last_name) COLLATE "C",
        lower(first_name) COLLATE "C",
        last_name COLLATE "C",
        first_name COLLATE "C"
"#;
const INSERT_ARITY: usize = 4;
const UPDATE_ARITY: usize = 5;
const DELETE_ARITY: usize = 1;

/// 飼育員リポジトリトレイト
#[async_trait]
pub trait ZookeeperRepository: Send + Sync {
    /// 全件を姓・名の順で取得する
    async fn find_all(&self) -> Result<Vec<Zookeeper>, InfraError>;

    /// 飼育員を登録する（成功時は採番 ID）
    async fn insert(&self, fields: &ZookeeperFields) -> Result<ProcedureOutcome, InfraError>;

    /// 飼育員を更新する
    async fn update(
        &self,
        id: KeeperId,
        fields: &ZookeeperFields,
    ) -> Result<ProcedureOutcome, InfraError>;

    /// 飼育員を削除する（担当割り当ても連鎖削除される）
    async fn delete(&self, id: KeeperId) -> Result<ProcedureOutcome, InfraError>;
}

/// PostgreSQL 実装の ZookeeperRepository
#[derive(Debug, Clone)]
pub struct PostgresZookeeperRepository {
    pool: PgPool,
}

impl PostgresZookeeperRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ZookeeperRow {
    keeper_id:  i32,
    first_name: String,
    last_name:  String,
    hire_date:  NaiveDate,
    speciality: String,
}

impl From<ZookeeperRow> for Zookeeper {
    fn from(row: ZookeeperRow) -> Self {
        Self {
            keeper_id:  KeeperId::new(row.keeper_id),
            first_name: row.first_name,
            last_name:  row.last_name,
            hire_date:  row.hire_date,
            speciality: row.speciality,
        }
    }
}

#[async_trait]
impl ZookeeperRepository for PostgresZookeeperRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Zookeeper>, InfraError> {
        let rows = sqlx::query_as::<_, ZookeeperRow>(SELECT_ALL_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Zookeeper::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, fields: &ZookeeperFields) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Insert, INSERT_ARITY);
        let query = call
            .query()
            .bind(&fields.first_name)
            .bind(&fields.last_name)
            .bind(fields.hire_date)
            .bind(&fields.speciality);

        call_procedure(&self.pool, call.name(), query).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(
        &self,
        id: KeeperId,
        fields: &ZookeeperFields,
    ) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Update, UPDATE_ARITY);
        let query = call
            .query()
            .bind(id.as_i32())
            .bind(&fields.first_name)
            .bind(&fields.last_name)
            .bind(fields.hire_date)
            .bind(&fields.speciality);

        call_procedure(&self.pool, call.name(), query).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: KeeperId) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Delete, DELETE_ARITY);
        let query = call.query().bind(id.as_i32());

        call_procedure(&self.pool, call.name(), query).await
    }
}
