//! # Zoo API
//!
//! 動物園データベースの CRUD を提供する REST API サーバー。
//!
//! ## 構成
//!
//! - [`handler`] - リソースごとのハンドラ（一覧・登録・更新・削除）とリセット
//! - [`app_builder`] - リポジトリの注入とルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - API エラーと HTTP レスポンスへの変換
//!
//! 書き込み系のハンドラはストアドファンクションを 1 回呼び出し、
//! その結果コードを HTTP ステータスに対応付ける。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
