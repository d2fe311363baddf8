//! # リポジトリ実装
//!
//! リソースごとのリポジトリトレイトと PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **1 操作 1 往復**: 一覧は結合済みの SELECT 1 本、書き込みは手続き呼び出し 1 回
//! - **結果の型付け**: 書き込みは [`ProcedureOutcome`](zoo_domain::ProcedureOutcome) を返す
//! - **テスタビリティ**: トレイト経由でインメモリ実装に差し替え可能

pub mod animal_repository;
pub mod assignment_repository;
pub mod enclosure_repository;
pub mod species_repository;
pub mod zoo_repository;
pub mod zookeeper_repository;

pub use animal_repository::{AnimalRepository, PostgresAnimalRepository};
pub use assignment_repository::{AssignmentRepository, PostgresAssignmentRepository};
pub use enclosure_repository::{EnclosureRepository, PostgresEnclosureRepository};
pub use species_repository::{PostgresSpeciesRepository, SpeciesRepository};
pub use zoo_repository::{PostgresZooRepository, ZooRepository};
pub use zookeeper_repository::{PostgresZookeeperRepository, ZookeeperRepository};
