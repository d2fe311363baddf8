//! # リソース種別
//!
//! API が扱う 5 種類のリソースと、それぞれの表示名・パス・手続き名の
//! 命名規約をまとめる。手続き名は `sp_<verb>_<resource>` 形式。

use strum::{Display, EnumIter};

/// データベースを初期状態に戻す手続き名
pub const RESET_PROCEDURE: &str = "sp_reset_zoo_database";

/// API が扱うリソースの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ResourceKind {
    Animal,
    Species,
    Enclosure,
    Zookeeper,
    Assignment,
}

/// 書き込み手続きの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ProcedureVerb {
    Insert,
    Update,
    Delete,
}

impl ProcedureVerb {
    /// 完了メッセージで使う過去分詞（例: `updated`）
    pub fn past_participle(self) -> &'static str {
        match self {
            Self::Insert => "inserted",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }

    /// 500 エラー時のメッセージで使う進行形（例: `updating`）
    pub fn gerund(self) -> &'static str {
        match self {
            Self::Insert => "inserting",
            Self::Update => "updating",
            Self::Delete => "deleting",
        }
    }
}

impl ResourceKind {
    /// レスポンスメッセージで使う単数形の表示名
    pub fn label(self) -> &'static str {
        match self {
            Self::Animal => "Animal",
            Self::Species => "Species",
            Self::Enclosure => "Enclosure",
            Self::Zookeeper => "Zookeeper",
            Self::Assignment => "Assignment",
        }
    }

    /// `/api` 配下のコレクションパス
    pub fn collection(self) -> &'static str {
        match self {
            Self::Animal => "Animals",
            Self::Species => "Species",
            Self::Enclosure => "Enclosures",
            Self::Zookeeper => "Zookeepers",
            Self::Assignment => "Assignments",
        }
    }

    /// 手続き名の末尾に付くリソース名
    pub fn procedure_suffix(self) -> &'static str {
        match self {
            Self::Animal => "animal",
            Self::Species => "species",
            Self::Enclosure => "enclosure",
            Self::Zookeeper => "zookeeper",
            Self::Assignment => "assignment",
        }
    }

    /// 採番 ID を返すときの JSON フィールド名
    ///
    /// 割り当ては複合キーのため `None`。
    pub fn id_field(self) -> Option<&'static str> {
        match self {
            Self::Animal => Some("animalId"),
            Self::Species => Some("speciesId"),
            Self::Enclosure => Some("enclosureId"),
            Self::Zookeeper => Some("keeperId"),
            Self::Assignment => None,
        }
    }

    /// 書き込み手続きの名前（例: `sp_insert_animal`）
    pub fn procedure(self, verb: ProcedureVerb) -> String {
        format!("sp_{verb}_{}", self.procedure_suffix())
    }

    /// 500 エラー時のメッセージで使う小文字の複数形
    pub fn plural_noun(self) -> String {
        self.collection().to_lowercase()
    }

    /// 500 エラー時のメッセージで使う小文字の単数形
    pub fn singular_noun(self) -> String {
        self.label().to_lowercase()
    }
}
