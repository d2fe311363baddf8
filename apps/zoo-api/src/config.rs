//! # Zoo API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::{env, str::FromStr};

use thiserror::Error;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";
/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 8373;
/// デフォルトの最大接続数
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 必須の環境変数が未設定
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   /// 値を解釈できない
   #[error("{name} の値が不正です: {value:?}")]
   Invalid { name: &'static str, value: String },
}

/// Zoo API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZooConfig {
   /// バインドアドレス
   pub host:            String,
   /// ポート番号
   pub port:            u16,
   /// データベース接続 URL
   pub database_url:    String,
   /// 接続プールの最大接続数
   pub max_connections: u32,
}

impl ZooConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// 空文字列は未設定として扱う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

      Ok(Self {
         host:            lookup("ZOO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port:            parse_or("ZOO_PORT", lookup("ZOO_PORT"), DEFAULT_PORT)?,
         database_url:    lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
         max_connections: parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
         )?,
      })
   }

   /// `host:port` 形式のバインドアドレス
   pub fn bind_address(&self) -> String {
      format!("{}:{}", self.host, self.port)
   }
}

fn parse_or<T: FromStr>(
   name: &'static str,
   value: Option<String>,
   default: T,
) -> Result<T, ConfigError> {
   match value {
      Some(value) => value
         .trim()
         .parse()
         .map_err(|_| ConfigError::Invalid { name, value }),
      None => Ok(default),
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn load(vars: &[(&str, &str)]) -> Result<ZooConfig, ConfigError> {
      let vars: HashMap<String, String> = vars
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      ZooConfig::from_lookup(|name| vars.get(name).cloned())
   }

   #[test]
   fn test_database_urlのみでデフォルト値が使われる() {
      let config = load(&[("DATABASE_URL", "postgres://localhost/zoo")]).unwrap();

      assert_eq!(
         config,
         ZooConfig {
            host:            "0.0.0.0".to_string(),
            port:            8373,
            database_url:    "postgres://localhost/zoo".to_string(),
            max_connections: 10,
         }
      );
      assert_eq!(config.bind_address(), "0.0.0.0:8373");
   }

   #[test]
   fn test_環境変数で上書きできる() {
      let config = load(&[
         ("DATABASE_URL", "postgres://db/zoo"),
         ("ZOO_HOST", "127.0.0.1"),
         ("ZOO_PORT", "9000"),
         ("DATABASE_MAX_CONNECTIONS", "3"),
      ])
      .unwrap();

      assert_eq!(config.bind_address(), "127.0.0.1:9000");
      assert_eq!(config.max_connections, 3);
   }

   #[rstest]
   #[case(&[])]
   #[case(&[("DATABASE_URL", "  ")])]
   fn test_database_urlが無ければエラー(#[case] vars: &[(&str, &str)]) {
      assert_eq!(load(vars), Err(ConfigError::Missing("DATABASE_URL")));
   }

   #[rstest]
   #[case("ZOO_PORT", "http")]
   #[case("ZOO_PORT", "70000")]
   #[case("DATABASE_MAX_CONNECTIONS", "-1")]
   fn test_数値にならない値はエラー(#[case] name: &'static str, #[case] value: &str) {
      let result = load(&[("DATABASE_URL", "postgres://db/zoo"), (name, value)]);

      assert_eq!(
         result,
         Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
         })
      );
   }
}
