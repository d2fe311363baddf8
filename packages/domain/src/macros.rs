/// SERIAL 列をラップする ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`i32` をラップ）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)`
/// - `Deserialize`: 数値と数字文字列の両方を受け付ける
/// - `new()` / `as_i32()` / `From<i32>`
///
/// # 使用例
///
/// ```rust
/// use zoo_domain::animal::AnimalId;
///
/// let id = AnimalId::new(7);
/// assert_eq!(id.as_i32(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
macro_rules! define_serial_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(i32);

        impl $Name {
            /// 既存の値から ID を作成する
            pub fn new(value: i32) -> Self {
                Self(value)
            }

            /// 内部の整数値を取得する
            pub fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $Name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl<'de> serde::Deserialize<'de> for $Name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                $crate::wire::deserialize_lenient_i32(deserializer).map(Self)
            }
        }
    };
}
