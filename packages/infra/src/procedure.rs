//! # ストアドファンクション呼び出し
//!
//! 書き込み系の操作はすべて `SELECT sp_<verb>_<resource>(...)` の 1 文で行う。
//! 関数の戻り値がそのまま結果コードになるため、同じ接続上で結果を読み直す
//! 2 回目の往復は存在しない。
//!
//! 手続き名は [`ResourceKind::procedure`] の命名規約から組み立てる。
//! 結果コードはここで [`ProcedureOutcome`] にデコードし、以降は型で扱う。

use sqlx::{PgPool, Postgres, postgres::PgArguments, query::QueryScalar};
use zoo_domain::{ProcedureOutcome, ProcedureVerb, ResourceKind, resource::RESET_PROCEDURE};

use crate::error::InfraError;

/// 結果コードを返す手続きの呼び出し文
///
/// ```
/// use zoo_domain::{ProcedureVerb, ResourceKind};
/// use zoo_infra::procedure::ProcedureCall;
///
/// let call = ProcedureCall::new(ResourceKind::Species, ProcedureVerb::Delete, 1);
/// assert_eq!(call.name(), "sp_delete_species");
/// assert_eq!(call.sql(), "SELECT sp_delete_species($1)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureCall {
    name: String,
    sql:  String,
}

impl ProcedureCall {
    /// `arity` 個のプレースホルダを持つ呼び出し文を作る
    pub fn new(kind: ResourceKind, verb: ProcedureVerb, arity: usize) -> Self {
        let name = kind.procedure(verb);
        let placeholders = (1..=arity)
            .map(|n| format!("${n}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("SELECT {name}({placeholders})");

        Self { name, sql }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// 引数をバインドする前のクエリ
    pub fn query(&self) -> QueryScalar<'_, Postgres, i32, PgArguments> {
        sqlx::query_scalar::<Postgres, i32>(&self.sql)
    }
}

/// 結果コードを返す手続きを 1 回呼び出し、結果をデコードする
///
/// プールから接続を 1 本借り、呼び出しが終わるまで占有する。
///
/// # 引数
///
/// * `procedure` - 手続き名（ログと結果コードエラーのメッセージに使用）
/// * `query` - 引数をバインド済みの `SELECT sp_...($1, ...)`
pub async fn call_procedure(
    pool: &PgPool,
    procedure: &str,
    query: QueryScalar<'_, Postgres, i32, PgArguments>,
) -> Result<ProcedureOutcome, InfraError> {
    let mut conn = pool.acquire().await?;
    let code = query.fetch_one(&mut *conn).await?;

    tracing::debug!(procedure, code, "ストアドファンクションを実行しました");

    Ok(ProcedureOutcome::from_code(procedure, code)?)
}

/// データベース全体を初期データの状態に戻す
///
/// 結果コードは返さない。呼び出し自体の成否のみを返す。
pub async fn call_reset(pool: &PgPool) -> Result<(), InfraError> {
    sqlx::query(&format!("CALL {RESET_PROCEDURE}()"))
        .execute(pool)
        .await?;

    tracing::info!(procedure = RESET_PROCEDURE, "データベースを初期状態に戻しました");

    Ok(())
}
