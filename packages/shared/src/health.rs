//! # ヘルスチェック共通型
//!
//! `/health`（Liveness）と `/health/ready`（Readiness）のレスポンス型。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// ```
/// use zoo_shared::HealthResponse;
///
/// let response = HealthResponse::healthy("0.1.0");
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（`"healthy"`）
    pub status:  String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status:  "healthy".to_string(),
            version: version.into(),
        }
    }
}

/// 個別チェックの結果ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Error,
}

/// Readiness 全体のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    /// 全依存先が利用可能
    Ready,
    /// 一部の依存先が利用不可
    NotReady,
}

/// Readiness Check レスポンス
///
/// `checks` のキーはチェック名（例: `"database"`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: ReadinessStatus,
    pub checks: BTreeMap<String, CheckStatus>,
}

impl ReadinessResponse {
    /// 個別チェック結果から全体のステータスを決める
    ///
    /// 1 つでも [`CheckStatus::Error`] があれば `NotReady`。
    pub fn from_checks(checks: BTreeMap<String, CheckStatus>) -> Self {
        let status = if checks.values().all(|c| *c == CheckStatus::Ok) {
            ReadinessStatus::Ready
        } else {
            ReadinessStatus::NotReady
        };
        Self { status, checks }
    }

    pub fn is_ready(&self) -> bool {
        self.status == ReadinessStatus::Ready
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_health_responseのserializeで正しいjson形状にする() {
        let json = serde_json::to_value(HealthResponse::healthy("0.1.0")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "healthy",
                "version": "0.1.0"
            })
        );
    }

    #[test]
    fn test_全チェック成功ならready() {
        let checks = BTreeMap::from([("database".to_string(), CheckStatus::Ok)]);

        let response = ReadinessResponse::from_checks(checks);

        assert!(response.is_ready());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["checks"]["database"], "ok");
    }

    #[test]
    fn test_失敗が1つでもあればnot_ready() {
        let checks = BTreeMap::from([("database".to_string(), CheckStatus::Error)]);

        let response = ReadinessResponse::from_checks(checks);

        assert!(!response.is_ready());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "not_ready");
        assert_eq!(json["checks"]["database"], "error");
    }
}
