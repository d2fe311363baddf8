//! # 飼育員ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/Zookeepers` - 飼育員一覧（姓・名の順）
//! - `POST /api/Zookeepers` - 飼育員の登録
//! - `PUT /api/Zookeepers/{id}` - 飼育員の更新
//! - `DELETE /api/Zookeepers/{id}` - 飼育員の削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   response::IntoResponse,
};
use zoo_domain::{
   ProcedureVerb,
   ResourceKind,
   zookeeper::{KeeperId, Zookeeper, ZookeeperFields},
};
use zoo_infra::repository::ZookeeperRepository;

use super::outcome::{
   changed,
   created,
   fetch_failed,
   generated_id_body,
   unreadable_update,
   write_failed,
};
use crate::error::ApiError;

const KIND: ResourceKind = ResourceKind::Zookeeper;

/// 飼育員 API の共有状態
pub struct ZookeeperState {
   pub repository: Arc<dyn ZookeeperRepository>,
}

/// GET /api/Zookeepers
pub async fn list_zookeepers(
   State(state): State<Arc<ZookeeperState>>,
) -> Result<Json<Vec<Zookeeper>>, ApiError> {
   let zookeepers = state
      .repository
      .find_all()
      .await
      .map_err(|e| fetch_failed(KIND, e))?;

   Ok(Json(zookeepers))
}

/// POST /api/Zookeepers
///
/// 成功時は `201 {"keeperId": n}`。
pub async fn create_zookeeper(
   State(state): State<Arc<ZookeeperState>>,
   payload: Result<Json<ZookeeperFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(fields) = payload?;

   let outcome = state
      .repository
      .insert(&fields)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Insert, e))?;

   created(KIND, outcome, |id| generated_id_body(KIND, id))
}

/// PUT /api/Zookeepers/{id}
pub async fn update_zookeeper(
   State(state): State<Arc<ZookeeperState>>,
   Path(id): Path<KeeperId>,
   payload: Result<Json<ZookeeperFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(fields) = payload.map_err(|e| unreadable_update(KIND, e))?;

   let outcome = state
      .repository
      .update(id, &fields)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Update, e))?;

   changed(KIND, ProcedureVerb::Update, outcome)
}

/// DELETE /api/Zookeepers/{id}
///
/// 担当割り当ても連鎖削除される。
pub async fn delete_zookeeper(
   State(state): State<Arc<ZookeeperState>>,
   Path(id): Path<KeeperId>,
) -> Result<impl IntoResponse, ApiError> {
   let outcome = state
      .repository
      .delete(id)
      .await
      .map_err(|e| write_failed(KIND, ProcedureVerb::Delete, e))?;

   changed(KIND, ProcedureVerb::Delete, outcome)
}
