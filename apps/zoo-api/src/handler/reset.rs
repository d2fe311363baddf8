//! # リセットハンドラ
//!
//! `POST /api/reset` でデータベース全体を初期データの状態に戻す。
//! 結果コードは持たず、手続き呼び出しの成否のみを返す。

use std::sync::Arc;

use axum::{Json, extract::State};
use zoo_infra::repository::ZooRepository;

use super::outcome::MessageResponse;
use crate::error::ApiError;

/// リセット API の共有状態
pub struct ResetState {
   pub repository: Arc<dyn ZooRepository>,
}

/// POST /api/reset
pub async fn reset_database(
   State(state): State<Arc<ResetState>>,
) -> Result<Json<MessageResponse>, ApiError> {
   state
      .repository
      .reset()
      .await
      .map_err(|e| ApiError::internal("Error resetting database", e))?;

   Ok(Json(MessageResponse::new("Database reset successfully")))
}
