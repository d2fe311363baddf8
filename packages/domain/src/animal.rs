//! # 動物（Animal）
//!
//! 種と飼育区画をそれぞれ 1 つずつ参照する。参照整合性はストアが保証する。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{enclosure::EnclosureId, species::SpeciesId, wire::deserialize_lenient_date};

define_serial_id! {
    /// 動物の識別子（`animals.animal_id`）
    pub struct AnimalId;
}

/// 動物の登録・更新で受け付ける項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalFields {
    pub name:          String,
    #[serde(deserialize_with = "deserialize_lenient_date")]
    pub date_of_birth: NaiveDate,
    pub sex:           String,
    pub species_id:    SpeciesId,
    pub enclosure_id:  EnclosureId,
}

/// 動物一覧の 1 行
///
/// 種と飼育区画の表示項目を結合済み。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalDetail {
    pub animal_id:       AnimalId,
    pub name:            String,
    pub date_of_birth:   NaiveDate,
    pub sex:             String,
    pub species_id:      SpeciesId,
    pub enclosure_id:    EnclosureId,
    pub species_name:    String,
    pub scientific_name: String,
    pub diet:            String,
    pub vert_type:       String,
    pub enclosure_type:  String,
    pub location:        String,
}
