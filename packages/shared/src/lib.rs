//! # Zoo 共有ユーティリティ
//!
//! API サーバーとテストから共通で使用するユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - トレーシング初期化は `observability` feature で有効化する

pub mod health;
pub mod observability;

pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
