//! # SpeciesRepository
//!
//! 種の一覧取得と、`sp_*_species` 手続きによる書き込みを担当する。

use async_trait::async_trait;
use sqlx::PgPool;
use zoo_domain::{
    ProcedureOutcome,
    ProcedureVerb,
    ResourceKind,
    species::{Species, SpeciesFields, SpeciesId},
};

use crate::{
    error::InfraError,
    procedure::{ProcedureCall, call_procedure},
};

const KIND: ResourceKind = ResourceKind::Species;

const SELECT_ALL_SQL: &str = r#"
    SELECT species_id, name, scientific_name, diet, vert_type
    FROM species
    ORDER BY lower(name) COLLATE "C", name COLLATE "C"
"#;
const INSERT_ARITY: usize = 4;
const UPDATE_ARITY: usize = 5;
const DELETE_ARITY: usize = 1;

/// 種リポジトリトレイト
#[async_trait]
pub trait SpeciesRepository: Send + Sync {
    /// 全件を名前順で取得する
    async fn find_all(&self) -> Result<Vec<Species>, InfraError>;

    /// 種を登録する（成功時は採番 ID）
    async fn insert(&self, fields: &SpeciesFields) -> Result<ProcedureOutcome, InfraError>;

    /// 種を更新する
    async fn update(
        &self,
        id: SpeciesId,
        fields: &SpeciesFields,
    ) -> Result<ProcedureOutcome, InfraError>;

    /// 種を削除する
    async fn delete(&self, id: SpeciesId) -> Result<ProcedureOutcome, InfraError>;
}

/// PostgreSQL 実装の SpeciesRepository
#[derive(Debug, Clone)]
pub struct PostgresSpeciesRepository {
    pool: PgPool,
}

impl PostgresSpeciesRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SpeciesRow {
    species_id:      i32,
    name:            String,
    scientific_name: String,
    diet:            String,
    vert_type:       String,
}

impl From<SpeciesRow> for Species {
    fn from(row: SpeciesRow) -> Self {
        Self {
            species_id:      SpeciesId::new(row.species_id),
            name:            row.name,
            scientific_name: row.scientific_name,
            diet:            row.diet,
            vert_type:       row.vert_type,
        }
    }
}

#[async_trait]
impl SpeciesRepository for PostgresSpeciesRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Species>, InfraError> {
        let rows = sqlx::query_as::<_, SpeciesRow>(SELECT_ALL_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Species::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, fields: &SpeciesFields) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Insert, INSERT_ARITY);
        let query = call
            .query()
            .bind(&fields.name)
            .bind(&fields.scientific_name)
            .bind(&fields.diet)
            .bind(&fields.vert_type);

        call_procedure(&self.pool, call.name(), query).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(
        &self,
        id: SpeciesId,
        fields: &SpeciesFields,
    ) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Update, UPDATE_ARITY);
        let query = call
            .query()
            .bind(id.as_i32())
            .bind(&fields.name)
            .bind(&fields.scientific_name)
            .bind(&fields.diet)
            .bind(&fields.vert_type);

        call_procedure(&self.pool, call.name(), query).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: SpeciesId) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Delete, DELETE_ARITY);
        let query = call.query().bind(id.as_i32());

        call_procedure(&self.pool, call.name(), query).await
    }
}
