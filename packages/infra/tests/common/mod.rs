//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するシードデータ定数・入力生成ヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::NaiveDate;
use zoo_domain::{
    animal::AnimalFields,
    enclosure::{EnclosureFields, EnclosureId},
    species::{SpeciesFields, SpeciesId},
    zookeeper::ZookeeperFields,
};

// =============================================================================
// シードデータ定数
// =============================================================================

/// シードデータの種の件数
pub const SEED_SPECIES_COUNT: usize = 4;

/// シードデータの動物の件数
pub const SEED_ANIMAL_COUNT: usize = 5;

/// シードデータの割り当ての件数
pub const SEED_ASSIGNMENT_COUNT: usize = 4;

/// シードデータのアフリカゾウ（Tembo と Nala が参照）
pub fn seed_elephant_id() -> SpeciesId {
    SpeciesId::new(1)
}

/// シードデータのサバンナ区画（North Zone）
pub fn seed_savanna_id() -> EnclosureId {
    EnclosureId::new(1)
}

// =============================================================================
// 入力生成ヘルパー
// =============================================================================

pub fn lion_fields() -> SpeciesFields {
    SpeciesFields {
        name:            "Lion".to_string(),
        scientific_name: "Panthera leo".to_string(),
        diet:            "Carnivore".to_string(),
        vert_type:       "Mammal".to_string(),
    }
}

pub fn enclosure_fields(location: &str, maximum_capacity: i32) -> EnclosureFields {
    EnclosureFields {
        enclosure_type: "Grassland".to_string(),
        location: location.to_string(),
        maximum_capacity,
    }
}

pub fn keeper_fields(first_name: &str, last_name: &str) -> ZookeeperFields {
    ZookeeperFields {
        first_name: first_name.to_string(),
        last_name:  last_name.to_string(),
        hire_date:  NaiveDate::from_ymd_opt(2022, 4, 1).unwrap(),
        speciality: "Primates".to_string(),
    }
}

pub fn animal_fields(
    name: &str,
    sex: &str,
    species_id: SpeciesId,
    enclosure_id: EnclosureId,
) -> AnimalFields {
    AnimalFields {
        name: name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2019, 1, 15).unwrap(),
        sex: sex.to_string(),
        species_id,
        enclosure_id,
    }
}
