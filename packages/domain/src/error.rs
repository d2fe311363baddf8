//! # ドメイン層エラー定義
//!
//! ストアドファンクションの結果コードなど、ドメインの取り決めに
//! 反する値を検出したときのエラー型。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// 取り決めにない結果コード
    ///
    /// `-99`、`0`、正の整数以外が返された場合に使用する。
    /// API 層では 500 として扱う。
    #[error("{procedure} が未定義の結果コードを返しました: {code}")]
    UnexpectedResultCode {
        /// 呼び出した手続き名
        procedure: String,
        /// 返された結果コード
        code:      i32,
    },
}
