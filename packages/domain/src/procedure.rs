//! # ストアドファンクションの結果
//!
//! 挿入・更新・削除の各手続きは結果コードを 1 つの整数で返す。
//! 番兵値の解釈はここに集約し、呼び出し側は [`ProcedureOutcome`] で分岐する。
//!
//! | 結果コード | 意味 | [`ProcedureOutcome`] |
//! |-----------|------|----------------------|
//! | `-99` | 手続き内で制約違反 | `ValidationError` |
//! | `0` | 対象行なし | `NotFound` |
//! | 正の整数 | 採番された ID、または影響行数 | `Success` |

use crate::DomainError;

/// 手続き内で制約違反が起きたことを表す結果コード
pub const VALIDATION_FAILED_CODE: i32 = -99;

/// 対象行が存在しなかったことを表す結果コード
pub const NOT_FOUND_CODE: i32 = 0;

/// ストアドファンクション呼び出しの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcedureOutcome {
    /// 成功（挿入なら採番 ID、更新・削除なら影響行数）
    Success(i32),
    /// 対象行が存在しない
    NotFound,
    /// 手続き内の制約違反（理由付き）
    ValidationError(String),
}

impl ProcedureOutcome {
    /// 手続きが返した結果コードをデコードする
    ///
    /// 取り決めにない負の値は [`DomainError::UnexpectedResultCode`] になる。
    pub fn from_code(procedure: &str, code: i32) -> Result<Self, DomainError> {
        match code {
            VALIDATION_FAILED_CODE => Ok(Self::ValidationError(format!(
                "{procedure} が制約違反により失敗しました"
            ))),
            NOT_FOUND_CODE => Ok(Self::NotFound),
            n if n > 0 => Ok(Self::Success(n)),
            n => Err(DomainError::UnexpectedResultCode {
                procedure: procedure.to_string(),
                code:      n,
            }),
        }
    }
}
