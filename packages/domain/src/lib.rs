//! # Zoo ドメイン層
//!
//! 動物園データベースが扱うエンティティと、ストアドファンクションの
//! 結果コードを表す値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **DB 非依存**: このクレートは sqlx や axum に依存しない
//! - **ワイヤー形式の一元化**: JSON のフィールド名（camelCase）はここで決める
//! - **結果コードの型付け**: `-99` / `0` などの番兵値は [`ProcedureOutcome`]
//!   に一度だけデコードし、それ以降は列挙型で扱う
//!
//! ## 依存関係の方向
//!
//! ```text
//! zoo-api → zoo-infra → zoo-domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`animal`] / [`species`] / [`enclosure`] / [`zookeeper`] / [`assignment`] - エンティティ
//! - [`resource`] - リソース種別と手続き名の命名規約
//! - [`procedure`] - ストアドファンクションの結果コード
//! - [`wire`] - クライアント入力の寛容なデシリアライズ
//! - [`error`] - ドメイン層のエラー

#[macro_use]
mod macros;

pub mod animal;
pub mod assignment;
pub mod enclosure;
pub mod error;
pub mod procedure;
pub mod resource;
pub mod species;
pub mod wire;
pub mod zookeeper;

pub use error::DomainError;
pub use procedure::ProcedureOutcome;
pub use resource::{ProcedureVerb, ResourceKind};
