//! # Zoo API エラー定義
//!
//! ハンドラが返すエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンス本文はプレーンテキストの固定文言。500 の場合も原因は
//! サーバーログにのみ出力し、クライアントには操作名だけを返す。

use axum::{
   extract::rejection::JsonRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use zoo_infra::InfraError;

/// Zoo API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// 不正なリクエスト（本文を解釈できない、または挿入が制約違反）
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// 対象が見つからない、または更新・削除に失敗した
   #[error("見つかりません: {0}")]
   NotFound(String),

   /// データベース呼び出しの失敗
   #[error("{context}: {source}")]
   Internal {
      /// クライアントに返す文言（例: `Error fetching animals`）
      context: String,
      #[source]
      source:  InfraError,
   },
}

impl ApiError {
   pub fn internal(context: impl Into<String>, source: InfraError) -> Self {
      Self::Internal {
         context: context.into(),
         source,
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      match self {
         ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
         ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
         ApiError::Internal { context, source } => {
            tracing::error!(
               error = %source,
               span_trace = %source.span_trace(),
               "{context}"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, context).into_response()
         }
      }
   }
}

impl From<JsonRejection> for ApiError {
   fn from(rejection: JsonRejection) -> Self {
      ApiError::BadRequest(rejection.body_text())
   }
}
