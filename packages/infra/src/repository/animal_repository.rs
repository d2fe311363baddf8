//! # AnimalRepository
//!
//! 動物の一覧取得と、`sp_*_animal` 手続きによる書き込みを担当する。
//! 一覧は種・飼育区画を結合し、画面表示に必要な項目をまとめて返す。

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use zoo_domain::{
    ProcedureOutcome,
    ProcedureVerb,
    ResourceKind,
    animal::{AnimalDetail, AnimalFields, AnimalId},
    enclosure::EnclosureId,
    species::SpeciesId,
};

use crate::{
    error::InfraError,
    procedure::{ProcedureCall, call_procedure},
};

const KIND: ResourceKind = ResourceKind::Animal;

const SELECT_ALL_SQL: &str = r#"
    SELECT
        a.animal_id,
        a.name,
        a.date_of_birth,
        a.sex,
        a.species_id,
        a.enclosure_id,
        s.name AS species_name,
        s.scientific_name,
        s.diet,
        s.vert_type,
        e.enclosure_type,
        e.location
    FROM animals a
    JOIN species s ON a.species_id = s.species_id
    JOIN enclosures e ON a.enclosure_id = e.enclosure_id
    ORDER BY lower(a.name) COLLATE "C", a.name COLLATE "C"
"#;
const INSERT_ARITY: usize = 5;
const UPDATE_ARITY: usize = 6;
const DELETE_ARITY: usize = 1;

/// 動物リポジトリトレイト
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// 種・飼育区画を結合した全件を名前順で取得する
    async fn find_all(&self) -> Result<Vec<AnimalDetail>, InfraError>;

    /// 動物を登録する（成功時は採番 ID）
    ///
    /// 存在しない種・飼育区画を参照した場合は制約違反になる。
    async fn insert(&self, fields: &AnimalFields) -> Result<ProcedureOutcome, InfraError>;

    /// 動物を更新する
    async fn update(
        &self,
        id: AnimalId,
        fields: &AnimalFields,
    ) -> Result<ProcedureOutcome, InfraError>;

    /// 動物を削除する
    async fn delete(&self, id: AnimalId) -> Result<ProcedureOutcome, InfraError>;
}

/// PostgreSQL 実装の AnimalRepository
#[derive(Debug, Clone)]
pub struct PostgresAnimalRepository {
    pool: PgPool,
}

impl PostgresAnimalRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AnimalRow {
    animal_id:       i32,
    name:            String,
    date_of_birth:   NaiveDate,
    sex:             String,
    species_id:      i32,
    enclosure_id:    i32,
    species_name:    String,
    scientific_name: String,
    diet:            String,
    vert_type:       String,
    enclosure_type:  String,
    location:        String,
}

impl From<AnimalRow> for AnimalDetail {
    fn from(row: AnimalRow) -> Self {
        Self {
            animal_id:       AnimalId::new(row.animal_id),
            name:            row.name,
            date_of_birth:   row.date_of_birth,
            sex:             row.sex,
            species_id:      SpeciesId::new(row.species_id),
            enclosure_id:    EnclosureId::new(row.enclosure_id),
            species_name:    row.species_name,
            scientific_name: row.scientific_name,
            diet:            row.diet,
            vert_type:       row.vert_type,
            enclosure_type:  row.enclosure_type,
            location:        row.location,
        }
    }
}

#[async_trait]
impl AnimalRepository for PostgresAnimalRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<AnimalDetail>, InfraError> {
        let rows = sqlx::query_as::<_, AnimalRow>(SELECT_ALL_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(AnimalDetail::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, fields: &AnimalFields) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Insert, INSERT_ARITY);
        let query = call
            .query()
            .bind(&fields.name)
            .bind(fields.date_of_birth)
            .bind(&fields.sex)
            .bind(fields.species_id.as_i32())
            .bind(fields.enclosure_id.as_i32());

        call_procedure(&self.pool, call.name(), query).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(
        &self,
        id: AnimalId,
        fields: &AnimalFields,
    ) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Update, UPDATE_ARITY);
        let query = call
            .query()
            .bind(id.as_i32())
            .bind(&fields.name)
            .bind(fields.date_of_birth)
            .bind(&fields.sex)
            .bind(fields.species_id.as_i32())
            .bind(fields.enclosure_id.as_i32());

        call_procedure(&self.pool, call.name(), query).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: AnimalId) -> Result<ProcedureOutcome, InfraError> {
        let call = ProcedureCall::new(KIND, ProcedureVerb::Delete, DELETE_ARITY);
        let query = call.query().bind(id.as_i32());

        call_procedure(&self.pool, call.name(), query).await
    }
}
