//! # 種（Species）
//!
//! 動物の分類。複数の動物から参照される。

use serde::{Deserialize, Serialize};

define_serial_id! {
    /// 種の識別子（`species.species_id`）
    pub struct SpeciesId;
}

/// 種の登録・更新で受け付ける項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesFields {
    pub name:            String,
    pub scientific_name: String,
    pub diet:            String,
    pub vert_type:       String,
}

/// 種（一覧の 1 行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub species_id:      SpeciesId,
    pub name:            String,
    pub scientific_name: String,
    pub diet:            String,
    pub vert_type:       String,
}

impl Species {
    /// ID と入力項目から組み立てる
    pub fn from_fields(species_id: SpeciesId, fields: SpeciesFields) -> Self {
        Self {
            species_id,
            name: fields.name,
            scientific_name: fields.scientific_name,
            diet: fields.diet,
            vert_type: fields.vert_type,
        }
    }
}
