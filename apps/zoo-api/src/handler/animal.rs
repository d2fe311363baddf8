//! # 動物ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/Animals` - 動物一覧（種・飼育区画の表示項目付き、名前順）
//! - `POST /api/Animals` - 動物の登録
//! - `PUT /api/Animals/{id}` - 動物の更新
//! - `DELETE /api/Animals/{id}` - 動物の削除
//!
//! 種・飼育区画の参照整合性と性別（`M` / `F`）はデータベースが検証する。
//! 違反は登録なら 400、更新なら 404 として返る。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   response::IntoResponse,
};
use zoo_domain::{
   ProcedureVerb,
   ResourceKind,
   animal::{AnimalDetail, AnimalFields, AnimalId},
};
use zoo_infra::repository::AnimalRepository;

use super::outcome::{
   changed,
   created,
   fetch_failed,
   generated_id_body,
   unreadable_update,
   write_failed,
};
use crate::error::ApiError;

const KIND: ResourceKind = ResourceKind::Animal;

/// 動物 API の共有状態
pub struct AnimalState {
   pub repository: Arc<dyn AnimalRepository>,
}

/// GET /api/Animals
pub async fn list_animals(
   State(state): State<Arc<AnimalState>>,
) -> Result<Json<Vec<AnimalDetail>>, ApiError> {
   let animals = state
      .repository
      .find_all()
      .await
      .map_err(|e| fetch_failed(KIND, e))?;

   Ok(Json(animals))
}

/// POST /api/Animals
///
/// 成功時は `201 {"animalId": n}`。
pub async fn create_animal(
   State(state): State<Arc<AnimalState>>,
   payload: Result<Json<AnimalFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(fields) = payload?;

   let outcome = state
      .repository
      .insert(&fields)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Insert, e))?;

   created(KIND, outcome, |id| generated_id_body(KIND, id))
}

/// PUT /api/Animals/{id}
pub async fn update_animal(
   State(state): State<Arc<AnimalState>>,
   Path(id): Path<AnimalId>,
   payload: Result<Json<AnimalFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(fields) = payload.map_err(|e| unreadable_update(KIND, e))?;

   let outcome = state
      .repository
      .update(id, &fields)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Update, e))?;

   changed(KIND, ProcedureVerb::Update, outcome)
}

/// DELETE /api/Animals/{id}
pub async fn delete_animal(
   State(state): State<Arc<AnimalState>>,
   Path(id): Path<AnimalId>,
) -> Result<impl IntoResponse, ApiError> {
   let outcome = state
      .repository
      .delete(id)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Delete, e))?;

   changed(KIND, ProcedureVerb::Delete, outcome)
}
