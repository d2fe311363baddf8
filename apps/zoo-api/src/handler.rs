//! # API ハンドラ
//!
//! リソースごとのハンドラと、手続き結果のレスポンス変換を提供する。
//! 各ハンドラはリポジトリを 1 回だけ呼び出す。

pub mod animal;
pub mod assignment;
pub mod enclosure;
pub mod health;
pub mod outcome;
pub mod reset;
pub mod species;
pub mod zookeeper;

pub use animal::{AnimalState, create_animal, delete_animal, list_animals, update_animal};
pub use assignment::{
   AssignmentState,
   create_assignment,
   delete_assignment,
   list_assignments,
   update_assignment,
};
pub use enclosure::{
   EnclosureState,
   create_enclosure,
   delete_enclosure,
   list_enclosures,
   update_enclosure,
};
pub use health::{ReadinessState, health_check, readiness_check};
pub use reset::{ResetState, reset_database};
pub use species::{SpeciesState, create_species, delete_species, list_species, update_species};
pub use zookeeper::{
   ZookeeperState,
   create_zookeeper,
   delete_zookeeper,
   list_zookeepers,
   update_zookeeper,
};
