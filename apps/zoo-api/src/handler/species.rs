//! # 種ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/Species` - 種一覧（名前順）
//! - `POST /api/Species` - 種の登録
//! - `PUT /api/Species/{id}` - 種の更新
//! - `DELETE /api/Species/{id}` - 種の削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   response::IntoResponse,
};
use zoo_domain::{
   ProcedureVerb,
   ResourceKind,
   species::{Species, SpeciesFields, SpeciesId},
};
use zoo_infra::repository::SpeciesRepository;

use super::outcome::{
   changed,
   created,
   fetch_failed,
   generated_id_body,
   unreadable_update,
   write_failed,
};
use crate::error::ApiError;

const KIND: ResourceKind = ResourceKind::Species;

/// 種 API の共有状態
pub struct SpeciesState {
   pub repository: Arc<dyn SpeciesRepository>,
}

/// GET /api/Species
pub async fn list_species(
   State(state): State<Arc<SpeciesState>>,
) -> Result<Json<Vec<Species>>, ApiError> {
   let species = state
      .repository
      .find_all()
      .await
      .map_err(|e| fetch_failed(KIND, e))?;

   Ok(Json(species))
}

/// POST /api/Species
///
/// 成功時は `201 {"speciesId": n}`。
pub async fn create_species(
   State(state): State<Arc<SpeciesState>>,
   payload: Result<Json<SpeciesFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(fields) = payload?;

   let outcome = state
      .repository
      .insert(&fields)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Insert, e))?;

   created(KIND, outcome, |id| generated_id_body(KIND, id))
}

/// PUT /api/Species/{id}
pub async fn update_species(
   State(state): State<Arc<SpeciesState>>,
   Path(id): Path<SpeciesId>,
   payload: Result<Json<SpeciesFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(fields) = payload.map_err(|e| unreadable_update(KIND, e))?;

   let outcome = state
      .repository
      .update(id, &fields)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Update, e))?;

   changed(KIND, ProcedureVerb::Update, outcome)
}

/// DELETE /api/Species/{id}
///
/// 動物が参照している種は削除できず、404 になる。
pub async fn delete_species(
   State(state): State<Arc<SpeciesState>>,
   Path(id): Path<SpeciesId>,
) -> Result<impl IntoResponse, ApiError> {
   let outcome = state
      .repository
      .delete(id)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Delete, e))?;

   changed(KIND, ProcedureVerb::Delete, outcome)
}
