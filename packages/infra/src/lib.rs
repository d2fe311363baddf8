//! # Zoo インフラ層
//!
//! PostgreSQL との接続と、各リソースのリポジトリ実装を担当する。
//!
//! ## 責務
//!
//! - **接続プール**: 起動時に一度だけ作成し、終了時に閉じる
//! - **マイグレーション**: テーブル・ストアドファンクション・初期データの投入
//! - **リポジトリ実装**: 一覧取得は 1 本の SELECT、書き込みは 1 回の関数呼び出し
//!
//! ## 依存関係
//!
//! ```text
//! zoo-api → zoo-infra → zoo-domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プールのライフサイクルと死活確認
//! - [`procedure`] - ストアドファンクション呼び出しと結果コードのデコード
//! - [`repository`] - リソースごとのリポジトリ
//! - [`error`] - インフラ層エラー定義
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use zoo_infra::{db, repository::PostgresSpeciesRepository};
//!
//! async fn setup() -> Result<(), zoo_infra::InfraError> {
//!     let pool = db::create_pool("postgres://localhost/zoo", 10).await?;
//!     db::run_migrations(&pool).await?;
//!     db::check_connection(&pool).await?;
//!
//!     let species = PostgresSpeciesRepository::new(pool.clone());
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod procedure;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
