//! # トレーシング初期化
//!
//! Zoo API のログ設定を環境変数から組み立て、subscriber を登録する。
//!
//! | 変数 | 既定値 | 内容 |
//! |------|--------|------|
//! | `LOG_FORMAT` | `pretty` | `json` または `pretty` |
//! | `RUST_LOG` | [`DEFAULT_LOG_FILTER`] | レベルフィルタ |
//!
//! 解釈できない `LOG_FORMAT` は `pretty` で起動し、subscriber 登録後に
//! 警告ログとして報告する。

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,zoo=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 イベントの JSON
    Json,
    /// 端末向けの整形出力
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する（大文字小文字は区別しない）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// 起動ログに出すサービス名
    pub service_name:    String,
    pub log_format:      LogFormat,
    /// `EnvFilter` の指定文字列
    pub filter:          String,
    /// 解釈できずに読み捨てた `LOG_FORMAT` の値
    pub rejected_format: Option<String>,
}

impl TracingConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::from_lookup(service_name, |name| std::env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 空文字列は未設定として扱う。
    pub fn from_lookup(
        service_name: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let (log_format, rejected_format) = match lookup("LOG_FORMAT") {
            None => (LogFormat::default(), None),
            Some(raw) => match LogFormat::parse(&raw) {
                Some(format) => (format, None),
                None => (LogFormat::default(), Some(raw)),
            },
        };

        Self {
            service_name: service_name.into(),
            log_format,
            filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            rejected_format,
        }
    }
}

/// トレーシングを初期化する
///
/// インフラ層のエラーが `SpanTrace` を取得できるよう、`ErrorLayer` も登録する。
/// 登録後、サービス名と出力形式を 1 行ログに出す。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let (env_filter, filter_error) = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    };

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    tracing::info!(
        service = %config.service_name,
        log_format = ?config.log_format,
        "トレーシングを初期化しました"
    );
    if let Some(value) = &config.rejected_format {
        tracing::warn!(value = %value, "LOG_FORMAT を解釈できないため pretty で出力します");
    }
    if let Some(error) = filter_error {
        tracing::warn!(
            filter = %config.filter,
            %error,
            "RUST_LOG を解釈できないため既定のフィルタを使います"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    // ===== LogFormat::parse テスト =====

    #[test]
    fn test_parse_大文字小文字を区別しない() {
        assert_eq!(LogFormat::parse("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" JSON "), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("Pretty"), Some(LogFormat::Pretty));
    }

    #[test]
    fn test_parse_未知の値はnone() {
        assert_eq!(LogFormat::parse("logfmt"), None);
    }

    // ===== TracingConfig::from_lookup テスト =====

    #[test]
    fn test_未設定なら既定の形式とフィルタになる() {
        let config = TracingConfig::from_lookup("zoo-api", lookup_from(&[]));

        assert_eq!(
            config,
            TracingConfig {
                service_name:    "zoo-api".to_string(),
                log_format:      LogFormat::Pretty,
                filter:          DEFAULT_LOG_FILTER.to_string(),
                rejected_format: None,
            }
        );
    }

    #[test]
    fn test_環境変数の形式とフィルタを使う() {
        let config = TracingConfig::from_lookup(
            "zoo-api",
            lookup_from(&[("LOG_FORMAT", "json"), ("RUST_LOG", "warn")]),
        );

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.filter, "warn");
    }

    #[test]
    fn test_解釈できない形式はprettyにして値を残す() {
        let config = TracingConfig::from_lookup("zoo-api", lookup_from(&[("LOG_FORMAT", "xml")]));

        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.rejected_format.as_deref(), Some("xml"));
    }

    #[test]
    fn test_空文字列は未設定として扱う() {
        let config = TracingConfig::from_lookup(
            "zoo-api",
            lookup_from(&[("LOG_FORMAT", ""), ("RUST_LOG", "  ")]),
        );

        assert_eq!(config.rejected_format, None);
        assert_eq!(config.filter, DEFAULT_LOG_FILTER);
    }
}
