//! # 飼育員（Zookeeper）

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::wire::deserialize_lenient_date;

define_serial_id! {
    /// 飼育員の識別子（`zookeepers.keeper_id`）
    pub struct KeeperId;
}

/// 飼育員の登録・更新で受け付ける項目
///
/// 専門分野は `speciality` が正式名。`specialty` も別名として受け付ける。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZookeeperFields {
    pub first_name: String,
    pub last_name:  String,
    #[serde(deserialize_with = "deserialize_lenient_date")]
    pub hire_date:  NaiveDate,
    #[serde(alias = "specialty")]
    pub speciality: String,
}

/// 飼育員（一覧の 1 行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zookeeper {
    pub keeper_id:  KeeperId,
    pub first_name: String,
    pub last_name:  String,
    pub hire_date:  NaiveDate,
    pub speciality: String,
}

impl Zookeeper {
    /// ID と入力項目から組み立てる
    pub fn from_fields(keeper_id: KeeperId, fields: ZookeeperFields) -> Self {
        Self {
            keeper_id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            hire_date: fields.hire_date,
            speciality: fields.speciality,
        }
    }

    /// 一覧表示用の氏名（`first last`）
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
