//! # 飼育担当割り当て（EnclosureAssignment）
//!
//! 飼育員と飼育区画の多対多を表す結合エンティティ。
//! `(keeper_id, enclosure_id)` の組で一意に識別される。

use serde::{Deserialize, Serialize};

use crate::{enclosure::EnclosureId, zookeeper::KeeperId};

/// 割り当ての複合キー（登録リクエストの本文も兼ねる）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentKey {
    pub keeper_id:    KeeperId,
    pub enclosure_id: EnclosureId,
}

impl AssignmentKey {
    pub fn new(keeper_id: KeeperId, enclosure_id: EnclosureId) -> Self {
        Self {
            keeper_id,
            enclosure_id,
        }
    }
}

/// 割り当ての付け替え先
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentChange {
    pub new_keeper_id:    KeeperId,
    pub new_enclosure_id: EnclosureId,
}

impl AssignmentChange {
    /// 付け替え後のキー
    pub fn target(&self) -> AssignmentKey {
        AssignmentKey::new(self.new_keeper_id, self.new_enclosure_id)
    }
}

/// 割り当て一覧の 1 行
///
/// 飼育員の氏名と飼育区画の表示項目を結合済み。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDetail {
    pub keeper_id:      KeeperId,
    pub enclosure_id:   EnclosureId,
    pub keeper_name:    String,
    pub speciality:     String,
    pub enclosure_type: String,
    pub location:       String,
}

impl AssignmentDetail {
    pub fn key(&self) -> AssignmentKey {
        AssignmentKey::new(self.keeper_id, self.enclosure_id)
    }
}
