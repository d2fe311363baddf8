//! # 飼育区画（Enclosure）
//!
//! 動物が収容され、飼育員が担当する区画。

use serde::{Deserialize, Serialize};

use crate::wire::deserialize_lenient_i32;

define_serial_id! {
    /// 飼育区画の識別子（`enclosures.enclosure_id`）
    pub struct EnclosureId;
}

/// 飼育区画の登録・更新で受け付ける項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnclosureFields {
    pub enclosure_type:   String,
    pub location:         String,
    #[serde(deserialize_with = "deserialize_lenient_i32")]
    pub maximum_capacity: i32,
}

/// 飼育区画（一覧の 1 行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enclosure {
    pub enclosure_id:     EnclosureId,
    pub enclosure_type:   String,
    pub location:         String,
    pub maximum_capacity: i32,
}

impl Enclosure {
    /// ID と入力項目から組み立てる
    pub fn from_fields(enclosure_id: EnclosureId, fields: EnclosureFields) -> Self {
        Self {
            enclosure_id,
            enclosure_type: fields.enclosure_type,
            location: fields.location,
            maximum_capacity: fields.maximum_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_フォームから文字列で届いた定員を受け付ける() {
        let fields: EnclosureFields = serde_json::from_value(json!({
            "enclosureType": "Savanna",
            "location": "North Zone",
            "maximumCapacity": "12"
        }))
        .unwrap();

        assert_eq!(fields.maximum_capacity, 12);
    }
}
