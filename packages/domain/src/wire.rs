//! # クライアント入力のデシリアライズ
//!
//! ブラウザのフォームは数値や日付を文字列のまま送ってくることがある。
//! ここでは `3` と `"3"`、`"2015-04-12"` と `"2015-04-12T00:00:00.000Z"` を
//! 同じ値として受け付けるデシリアライザを提供する。

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de::Error as _};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

/// 数値または数字文字列を `i32` として読み取る
pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => {
            i32::try_from(n).map_err(|_| D::Error::custom(format!("整数の範囲外です: {n}")))
        }
        NumberOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("整数として解釈できません: {s:?}"))),
    }
}

/// `YYYY-MM-DD`、または日時表現の日付部分を `NaiveDate` として読み取る
pub fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let date_part = text.split('T').next().unwrap_or_default().trim();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| D::Error::custom(format!("日付として解釈できません: {text:?}")))
}
