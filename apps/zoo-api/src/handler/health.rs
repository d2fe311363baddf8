//! # ヘルスチェックハンドラ
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready`: Readiness Check（データベースへの `SELECT 1` を確認）
//!
//! レスポンス型は [`zoo_shared::HealthResponse`] / [`zoo_shared::ReadinessResponse`] を参照。

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use zoo_infra::db::DatabaseProbe;
use zoo_shared::{CheckStatus, HealthResponse, ReadinessResponse};

/// データベース確認のタイムアウト
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check 用の State
pub struct ReadinessState {
   pub probe: Arc<dyn DatabaseProbe>,
}

/// GET /health/ready
///
/// 全チェック OK → 200、1 つでも失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
   let database = check_database(state.probe.as_ref()).await;
   let response = ReadinessResponse::from_checks(BTreeMap::from([(
      "database".to_string(),
      database,
   )]));

   let http_status = if response.is_ready() {
      StatusCode::OK
   } else {
      StatusCode::SERVICE_UNAVAILABLE
   };

   (http_status, Json(response))
}

async fn check_database(probe: &dyn DatabaseProbe) -> CheckStatus {
   match tokio::time::timeout(PROBE_TIMEOUT, probe.ping()).await {
      Ok(Ok(())) => CheckStatus::Ok,
      Ok(Err(e)) => {
         tracing::warn!(error = %e, "readiness check: database ping failed");
         CheckStatus::Error
      }
      Err(_) => {
         tracing::warn!("readiness check: database check timed out");
         CheckStatus::Error
      }
   }
}
