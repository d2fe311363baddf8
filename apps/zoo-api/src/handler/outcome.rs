//! # 手続き結果のレスポンス変換
//!
//! [`ProcedureOutcome`] を HTTP ステータスと本文に対応付ける。
//!
//! | 操作 | Success | NotFound | ValidationError |
//! |------|---------|----------|-----------------|
//! | 挿入 | 201 + 採番 ID | 404 | 400 |
//! | 更新 | 200 + メッセージ | 404 | 404 |
//! | 削除 | 200 + メッセージ | 404 | 404 |
//!
//! 更新・削除では対象なしと制約違反をクライアントから区別しない。
//! 更新本文を解釈できない場合も同じ 404 になる。

use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use zoo_domain::{ProcedureOutcome, ProcedureVerb, ResourceKind};
use zoo_infra::InfraError;

use crate::error::ApiError;

/// 更新・削除・リセットの成功レスポンス
#[derive(Debug, Serialize)]
pub struct MessageResponse {
   pub message: String,
}

impl MessageResponse {
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         message: message.into(),
      }
   }
}

/// 一覧取得失敗時のエラー（例: `Error fetching animals`）
pub fn fetch_failed(kind: ResourceKind, source: InfraError) -> ApiError {
   ApiError::internal(format!("Error fetching {}", kind.plural_noun()), source)
}

/// 書き込み失敗時のエラー（例: `Error updating animal`）
pub fn write_failed(kind: ResourceKind, verb: ProcedureVerb, source: InfraError) -> ApiError {
   ApiError::internal(
      format!("Error {} {}", verb.gerund(), kind.singular_noun()),
      source,
   )
}

/// 採番 ID を `{"<idField>": n}` の形で返す本文
pub fn generated_id_body(kind: ResourceKind, id: i32) -> JsonValue {
   let field = kind.id_field().unwrap_or("id");
   let mut body = Map::new();
   body.insert(field.to_string(), JsonValue::from(id));
   JsonValue::Object(body)
}

/// 挿入結果をレスポンスに変換する
///
/// 成功時の本文は `body` で組み立てる（引数は手続きの戻り値）。
pub fn created(
   kind: ResourceKind,
   outcome: ProcedureOutcome,
   body: impl FnOnce(i32) -> JsonValue,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
   match outcome {
      ProcedureOutcome::Success(value) => Ok((StatusCode::CREATED, Json(body(value)))),
      ProcedureOutcome::NotFound => Err(ApiError::NotFound(format!(
         "{} not found or insert failed",
         kind.label()
      ))),
      ProcedureOutcome::ValidationError(reason) => {
         tracing::debug!(%reason, resource = %kind, "挿入が制約違反で失敗しました");
         Err(ApiError::BadRequest(format!("{} insert failed", kind.label())))
      }
   }
}

/// 更新・削除が対象に届かなかったときのエラー（例: `Animal not found or update failed`）
fn not_changed(kind: ResourceKind, verb: ProcedureVerb) -> ApiError {
   ApiError::NotFound(format!("{} not found or {verb} failed", kind.label()))
}

/// 更新本文を解釈できなかったときのエラー
///
/// 手続きは呼ばずに、更新失敗と同じ 404 を返す。
pub fn unreadable_update(kind: ResourceKind, rejection: JsonRejection) -> ApiError {
   tracing::debug!(
      resource = %kind,
      reason = %rejection.body_text(),
      "更新本文を解釈できないため対象なしとして扱います"
   );
   not_changed(kind, ProcedureVerb::Update)
}

/// 更新・削除の結果をレスポンスに変換する
pub fn changed(
   kind: ResourceKind,
   verb: ProcedureVerb,
   outcome: ProcedureOutcome,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
   let not_found = || not_changed(kind, verb);

   match outcome {
      ProcedureOutcome::Success(_) => Ok((
         StatusCode::OK,
         Json(MessageResponse::new(format!(
            "{} {} successfully",
            kind.label(),
            verb.past_participle()
         ))),
      )),
      ProcedureOutcome::NotFound => Err(not_found()),
      ProcedureOutcome::ValidationError(reason) => {
         tracing::debug!(%reason, resource = %kind, %verb, "制約違反を対象なしとして扱います");
         Err(not_found())
      }
   }
}

#[cfg(test)]
mod tests {
   use axum::{
      body::Body,
      extract::FromRequest,
      http::{Request, header},
   };
   use pretty_assertions::assert_eq;
   use rstest::rstest;
   use serde_json::json;
   use zoo_domain::animal::AnimalFields;

   use super::*;

   #[rstest]
   #[case(ResourceKind::Animal, json!({"animalId": 7}))]
   #[case(ResourceKind::Species, json!({"speciesId": 7}))]
   #[case(ResourceKind::Enclosure, json!({"enclosureId": 7}))]
   #[case(ResourceKind::Zookeeper, json!({"keeperId": 7}))]
   fn test_採番idはリソースごとのフィールド名で返す(
      #[case] kind: ResourceKind,
      #[case] expected: JsonValue,
   ) {
      assert_eq!(generated_id_body(kind, 7), expected);
   }

   #[test]
   fn test_挿入成功は201() {
      let (status, Json(body)) = created(
         ResourceKind::Species,
         ProcedureOutcome::Success(5),
         |id| generated_id_body(ResourceKind::Species, id),
      )
      .unwrap();

      assert_eq!(status, StatusCode::CREATED);
      assert_eq!(body, json!({"speciesId": 5}));
   }

   #[test]
   fn test_挿入の制約違反は400() {
      let result = created(
         ResourceKind::Animal,
         ProcedureOutcome::ValidationError("fk".to_string()),
         |id| generated_id_body(ResourceKind::Animal, id),
      );

      assert!(matches!(result, Err(ApiError::BadRequest(msg)) if msg == "Animal insert failed"));
   }

   #[rstest]
   #[case(ProcedureVerb::Update, "Zookeeper updated successfully")]
   #[case(ProcedureVerb::Delete, "Zookeeper deleted successfully")]
   fn test_更新削除の成功メッセージ(#[case] verb: ProcedureVerb, #[case] expected: &str) {
      let (status, Json(body)) =
         changed(ResourceKind::Zookeeper, verb, ProcedureOutcome::Success(1)).unwrap();

      assert_eq!(status, StatusCode::OK);
      assert_eq!(body.message, expected);
   }

   #[rstest]
   #[case(ProcedureOutcome::NotFound, ProcedureVerb::Update, "Animal not found or update failed")]
   #[case(
      ProcedureOutcome::ValidationError("check".to_string()),
      ProcedureVerb::Update,
      "Animal not found or update failed"
   )]
   #[case(ProcedureOutcome::NotFound, ProcedureVerb::Delete, "Animal not found or delete failed")]
   #[case(
      ProcedureOutcome::ValidationError("fk".to_string()),
      ProcedureVerb::Delete,
      "Animal not found or delete failed"
   )]
   fn test_更新削除の失敗は404に集約される(
      #[case] outcome: ProcedureOutcome,
      #[case] verb: ProcedureVerb,
      #[case] expected: &str,
   ) {
      let result = changed(ResourceKind::Animal, verb, outcome);

      assert!(matches!(result, Err(ApiError::NotFound(msg)) if msg == expected));
   }

   #[tokio::test]
   async fn test_解釈できない更新本文は更新失敗と同じ404になる() {
      let request = Request::builder()
         .header(header::CONTENT_TYPE, "application/json")
         .body(Body::from("{}"))
         .unwrap();
      let rejection = Json::<AnimalFields>::from_request(request, &())
         .await
         .unwrap_err();

      let error = unreadable_update(ResourceKind::Animal, rejection);

      assert!(matches!(error, ApiError::NotFound(msg) if msg == "Animal not found or update failed"));
   }

   #[test]
   fn test_失敗メッセージの文言() {
      let fetch = fetch_failed(ResourceKind::Assignment, InfraError::unexpected("x"));
      let write = write_failed(
         ResourceKind::Species,
         ProcedureVerb::Insert,
         InfraError::unexpected("x"),
      );

      assert!(matches!(fetch, ApiError::Internal { context, .. } if context == "Error fetching assignments"));
      assert!(matches!(write, ApiError::Internal { context, .. } if context == "Error inserting species"));
   }
}
