//! # 飼育区画ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/Enclosures` - 飼育区画一覧（所在地順）
//! - `POST /api/Enclosures` - 飼育区画の登録
//! - `PUT /api/Enclosures/{id}` - 飼育区画の更新
//! - `DELETE /api/Enclosures/{id}` - 飼育区画の削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   response::IntoResponse,
};
use zoo_domain::{
   ProcedureVerb,
   ResourceKind,
   enclosure::{Enclosure, EnclosureFields, EnclosureId},
};
use zoo_infra::repository::EnclosureRepository;

use super::outcome::{
   changed,
   created,
   fetch_failed,
   generated_id_body,
   unreadable_update,
   write_failed,
};
use crate::error::ApiError;

const KIND: ResourceKind = ResourceKind::Enclosure;

/// 飼育区画 API の共有状態
pub struct EnclosureState {
   pub repository: Arc<dyn EnclosureRepository>,
}

/// GET /api/Enclosures
pub async fn list_enclosures(
   State(state): State<Arc<EnclosureState>>,
) -> Result<Json<Vec<Enclosure>>, ApiError> {
   let enclosures = state
      .repository
      .find_all()
      .await
      .map_err(|e| fetch_failed(KIND, e))?;

   Ok(Json(enclosures))
}

/// POST /api/Enclosures
///
/// 成功時は `201 {"enclosureId": n}`。
pub async fn create_enclosure(
   State(state): State<Arc<EnclosureState>>,
   payload: Result<Json<EnclosureFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(fields) = payload?;

   let outcome = state
      .repository
      .insert(&fields)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Insert, e))?;

   created(KIND, outcome, |id| generated_id_body(KIND, id))
}

/// PUT /api/Enclosures/{id}
pub async fn update_enclosure(
   State(state): State<Arc<EnclosureState>>,
   Path(id): Path<EnclosureId>,
   payload: Result<Json<EnclosureFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(fields) = payload.map_err(|e| unreadable_update(KIND, e))?;

   let outcome = state
      .repository
      .update(id, &fields)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Update, e))?;

   changed(KIND, ProcedureVerb::Update, outcome)
}

/// DELETE /api/Enclosures/{id}
///
/// 動物が収容されている区画は削除できず、404 になる。
/// 担当割り当ては連鎖削除される。
pub async fn delete_enclosure(
   State(state): State<Arc<EnclosureState>>,
   Path(id): Path<EnclosureId>,
) -> Result<impl IntoResponse, ApiError> {
   let outcome = state
      .repository
      .delete(id)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Delete, e))?;

   changed(KIND, ProcedureVerb::Delete, outcome)
}
