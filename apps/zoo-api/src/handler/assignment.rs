//! # 割り当てハンドラ
//!
//! 飼育員と飼育区画の割り当ては複合キーで識別する。
//!
//! ## エンドポイント
//!
//! - `GET /api/Assignments` - 割り当て一覧（飼育員名順）
//! - `POST /api/Assignments` - 割り当ての登録（本文: `{keeperId, enclosureId}`）
//! - `PUT /api/Assignments/{keeper_id}/{enclosure_id}` - 付け替え（本文: `{newKeeperId, newEnclosureId}`）
//! - `DELETE /api/Assignments/{keeper_id}/{enclosure_id}` - 割り当ての削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   response::IntoResponse,
};
use serde_json::json;
use zoo_domain::{
   ProcedureVerb,
   ResourceKind,
   assignment::{AssignmentChange, AssignmentDetail, AssignmentKey},
   enclosure::EnclosureId,
   zookeeper::KeeperId,
};
use zoo_infra::repository::AssignmentRepository;

use super::outcome::{changed, created, fetch_failed, unreadable_update, write_failed};
use crate::error::ApiError;

const KIND: ResourceKind = ResourceKind::Assignment;

/// 割り当て API の共有状態
pub struct AssignmentState {
   pub repository: Arc<dyn AssignmentRepository>,
}

/// GET /api/Assignments
pub async fn list_assignments(
   State(state): State<Arc<AssignmentState>>,
) -> Result<Json<Vec<AssignmentDetail>>, ApiError> {
   let assignments = state
      .repository
      .find_all()
      .await
      .map_err(|e| fetch_failed(KIND, e))?;

   Ok(Json(assignments))
}

/// POST /api/Assignments
///
/// 採番 ID の代わりに複合キー `{"keeperId": k, "enclosureId": e}` を返す。
pub async fn create_assignment(
   State(state): State<Arc<AssignmentState>>,
   payload: Result<Json<AssignmentKey>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(key) = payload?;

   let outcome = state
      .repository
      .insert(key)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Insert, e))?;

   created(KIND, outcome, |_| {
      json!({
         "keeperId": key.keeper_id,
         "enclosureId": key.enclosure_id,
      })
   })
}

/// PUT /api/Assignments/{keeper_id}/{enclosure_id}
pub async fn update_assignment(
   State(state): State<Arc<AssignmentState>>,
   Path((keeper_id, enclosure_id)): Path<(KeeperId, EnclosureId)>,
   payload: Result<Json<AssignmentChange>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(change) = payload.map_err(|e| unreadable_update(KIND, e))?;
   let current = AssignmentKey::new(keeper_id, enclosure_id);

   let outcome = state
      .repository
      .update(current, change)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Update, e))?;

   changed(KIND, ProcedureVerb::Update, outcome)
}

/// DELETE /api/Assignments/{keeper_id}/{enclosure_id}
pub async fn delete_assignment(
   State(state): State<Arc<AssignmentState>>,
   Path((keeper_id, enclosure_id)): Path<(KeeperId, EnclosureId)>,
) -> Result<impl IntoResponse, ApiError> {
   let outcome = state
      .repository
      .delete(AssignmentKey::new(keeper_id, enclosure_id))
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Delete, e))?;

   changed(KIND, ProcedureVerb::Delete, outcome)
}
