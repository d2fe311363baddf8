//! # AssignmentRepository
//!
//! 飼育員と飼育区画の割り当てを扱う。割り当ては複合キー
//! `(keeper_id, enclosure_id)` で識別され、更新はキーそのものの付け替えになる。

use async_trait::async_trait;
use sqlx::PgPool;
use zoo_domain::{
    ProcedureOutcome,
    ProcedureVerb,
    ResourceKind,
    assignment::{AssignmentChange, AssignmentDetail, AssignmentKey},
    enclosure::EnclosureId,
    zookeeper::KeeperId,
};

use crate::{
    error::InfraError,
    procedure::{ProcedureCall, call_procedure},
};

const KIND: ResourceKind = ResourceKind::Assignment;

const SELECT_ALL_SQL: &str = r#"
    SELECT
        ea.keeper_id,
        ea.enclosure_id,
        z.first_name || ' ' || z.last_name AS keeper_name,
        z.speciality,
        e.enclosure_type,
        e.location
    FROM enclosure_assignments ea
    JOIN zookeepers z ON ea.keeper_id = z.keeper_id
    JOIN enclosures e ON ea.enclosure_id = e.enclosure_id
    ORDER BY
        lower(z.first_name || ' ' || z.last_name) COLLATE "C",
        (z.first_name || ' ' || z.last_name) COLLATE "C",
        lower(e.location) COLLATE "C",
        e.location COLLATE "C"
"#;
const INSERT_ARITY: usize = 2;
const UPDATE_ARITY: usize = 4;
const DELETE_ARITY: usize = 2;

/// 割り当てリポジトリトレイト
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// 飼育員名・飼育区画を結合した全件を飼育員名順で取得する
    async fn find_all(&self) -> Result<Vec<AssignmentDetail>, InfraError>;

    /// 割り当てを登録する
    ///
    /// 採番は行わないため、成功時の値に意味はない。
    async fn insert(&self, key: AssignmentKey) -> Result<ProcedureOutcome, InfraError>;

    /// `current` の割り当てを `change` の組へ付け替える
    async fn update(
        &self,
        current: AssignmentKey,
        change: AssignmentChange,
    ) -> Result<ProcedureOutcome, InfraError>;

    /// 割り当てを削除する
    async fn delete(&self, key: AssignmentKey) -> Result<ProcedureOutcome, InfraError>;
}

/// PostgreSQL 実装の AssignmentRepository
#[derive(Debug, Clone)]
pub struct PostgresAssignmentRepository {
    pool: PgPool,
}

impl PostgresAssignmentRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AssignmentRow {
    keeper_id:      i32,
    enclosure_id:   i32,
    keeper_name:    String,
    speciality:     String,
    enclosure_type: String,
    location:       String,
}

impl From<AssignmentRow> for AssignmentDetail {
    fn from(row: AssignmentRow) -> Self {
        Self {
            keeper_id:      KeeperId::new(row.keeper_id),
            enclosure_id:   EnclosureId::new(row.enclosure_id),
            keeper_name:    row.keeper_name,
            speciality:     row.speciality,
            enclosure_type: row.enclosure_type,
            location:       row.location,
        }
    }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<AssignmentDetail>, InfraError> {
        let rows = sqlx::query_as::<_, AssignmentRow>(SELECT_ALL_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(AssignmentDetail::from).collect())
    }

    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(keeper_id = %key.keeper_id, enclosure_id = %key.enclosure_id)
    )]
    async fn insert(&self, key: AssignmentKey) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Insert, INSERT_ARITY);
        let query = call
            .query()
            .bind(key.keeper_id.as_i32())
            .bind(key.enclosure_id.as_i32());

        call_procedure(&self.pool, call.name(), query).await
    }

    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(keeper_id = %current.keeper_id, enclosure_id = %current.enclosure_id)
    )]
    async fn update(
        &self,
        current: AssignmentKey,
        change: AssignmentChange,
    ) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Update, UPDATE_ARITY);
        let query = call
            .query()
            .bind(current.keeper_id.as_i32())
            .bind(current.enclosure_id.as_i32())
            .bind(change.new_keeper_id.as_i32())
            .bind(change.new_enclosure_id.as_i32());

        call_procedure(&self.pool, call.name(), query).await
    }

    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(keeper_id = %key.keeper_id, enclosure_id = %key.enclosure_id)
    )]
    async fn delete(&self, key: AssignmentKey) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Delete, DELETE_ARITY);
        let query = call
            .query()
            .bind(key.keeper_id.as_i32())
            .bind(key.enclosure_id.as_i32());

        call_procedure(&self.pool, call.name(), query).await
    }
}
