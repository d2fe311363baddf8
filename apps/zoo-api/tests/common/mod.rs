//! ハンドラテスト共通ヘルパー
//!
//! インメモリストアを詰めたルーターを組み立て、`oneshot` でリクエストを送る。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   http::{Method, Request, StatusCode, header},
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use zoo_api::app_builder::{Repositories, build_router};
use zoo_infra::mock::InMemoryZoo;

/// すべてのリポジトリを同じインメモリストアで埋める
///
/// 一部だけ差し替えたいテストは、返した値のフィールドを上書きしてから
/// `build_router` に渡す。
pub fn in_memory_repositories(zoo: &InMemoryZoo) -> Repositories {
   Repositories {
      animals:     Arc::new(zoo.clone()),
      species:     Arc::new(zoo.clone()),
      enclosures:  Arc::new(zoo.clone()),
      zookeepers:  Arc::new(zoo.clone()),
      assignments: Arc::new(zoo.clone()),
      zoo:         Arc::new(zoo.clone()),
      probe:       Arc::new(zoo.clone()),
   }
}

/// テスト用アプリケーションを構築する
///
/// 返したストアを操作すると、ルーターから見える状態も変わる。
pub fn create_test_app() -> (Router, InMemoryZoo) {
   let zoo = InMemoryZoo::new();

   (build_router(in_memory_repositories(&zoo)), zoo)
}

/// テスト用レスポンス
pub struct TestResponse {
   pub status: StatusCode,
   pub body:   Vec<u8>,
}

impl TestResponse {
   /// 本文を JSON として解析する
   pub fn json(&self) -> JsonValue {
      serde_json::from_slice(&self.body).unwrap()
   }

   /// 本文をテキストとして取得する
   pub fn text(&self) -> String {
      String::from_utf8(self.body.clone()).unwrap()
   }
}

/// リクエストを送信する
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<JsonValue>) -> TestResponse {
   let builder = Request::builder().method(method).uri(uri);
   let request = match body {
      Some(json) => builder
         .header(header::CONTENT_TYPE, "application/json")
         .body(Body::from(json.to_string())),
      None => builder.body(Body::empty()),
   }
   .unwrap();

   send_request(app, request).await
}

/// 組み立て済みのリクエストを送信する
pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
   let response = app.clone().oneshot(request).await.unwrap();
   let status = response.status();
   let body = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();

   TestResponse {
      status,
      body: body.to_vec(),
   }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
   send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: JsonValue) -> TestResponse {
   send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: JsonValue) -> TestResponse {
   send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
   send(app, Method::DELETE, uri, None).await
}
