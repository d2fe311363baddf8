//! # EnclosureRepository
//!
//! 飼育区画の一覧取得と、`sp_*_enclosure` 手続きによる書き込みを担当する。

use async_trait::async_trait;
use sqlx::PgPool;
use zoo_domain::{
    ProcedureOutcome,
    ProcedureVerb,
    ResourceKind,
    enclosure::{Enclosure, EnclosureFields, EnclosureId},
};

use crate::{
    error::InfraError,
    procedure::{ProcedureCall, call_procedure},
};

const KIND: ResourceKind = ResourceKind::Enclosure;

const SELECT_ALL_SQL: &str = r#"
    SELECT enclosure_id, enclosure_type, location, maximum_capacity
    FROM enclosures
    ORDER BY lower(location) COLLATE "C", location COLLATE "C"
"#;
const INSERT_ARITY: usize = 3;
const UPDATE_ARITY: usize = 4;
const DELETE_ARITY: usize = 1;

/// 飼育区画リポジトリトレイト
#[async_trait]
pub trait EnclosureRepository: Send + Sync {
    /// 全件を所在地順で取得する
    async fn find_all(&self) -> Result<Vec<Enclosure>, InfraError>;

    /// 飼育区画を登録する（成功時は採番 ID）
    async fn insert(&self, fields: &EnclosureFields) -> Result<ProcedureOutcome, InfraError>;

    /// 飼育区画を更新する
    async fn update(
        &self,
        id: EnclosureId,
        fields: &EnclosureFields,
    ) -> Result<ProcedureOutcome, InfraError>;

    /// 飼育区画を削除する
    ///
    /// 動物が収容されている区画は削除できない（制約違反）。
    async fn delete(&self, id: EnclosureId) -> Result<ProcedureOutcome, InfraError>;
}

/// PostgreSQL 実装の EnclosureRepository
#[derive(Debug, Clone)]
pub struct PostgresEnclosureRepository {
    pool: PgPool,
}

impl PostgresEnclosureRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EnclosureRow {
    enclosure_id:     i32,
    enclosure_type:   String,
    location:         String,
    maximum_capacity: i32,
}

impl From<EnclosureRow> for Enclosure {
    fn from(row: EnclosureRow) -> Self {
        Self {
            enclosure_id:     EnclosureId::new(row.enclosure_id),
            enclosure_type:   row.enclosure_type,
            location:         row.location,
            maximum_capacity: row.maximum_capacity,
        }
    }
}

#[async_trait]
impl EnclosureRepository for PostgresEnclosureRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Enclosure>, InfraError> {
        let rows = sqlx::query_as::<_, EnclosureRow>(SELECT_ALL_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Enclosure::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, fields: &EnclosureFields) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Insert, INSERT_ARITY);
        let query = call
            .query()
            .bind(&fields.enclosure_type)
            .bind(&fields.location)
            .bind(fields.maximum_capacity);

        call_procedure(&self.pool, call.name(), query).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(
        &self,
        id: EnclosureId,
        fields: &EnclosureFields,
    ) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Update, UPDATE_ARITY);
        let query = call
            .query()
            .bind(id.as_i32())
            .bind(&fields.enclosure_type)
            .bind(&fields.location)
            .bind(fields.maximum_capacity);

        call_procedure(&self.pool, call.name(), query).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: EnclosureId) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Delete, DELETE_ARITY);
        let query = call.query().bind(id.as_i32());

        call_procedure(&self.pool, call.name(), query).await
    }
}
