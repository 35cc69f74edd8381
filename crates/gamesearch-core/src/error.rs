//! エラー型
//!
//! 中断（Aborted）は欠陥ではなく「呼び出し側がもう結果を要らない」という
//! 第一級のシグナル。新しい探索をやり直せば常に回復できる。
//! それ以外の変種はゲーム側モジュールのバグを示し、探索ループは
//! 決して握りつぶさない。

use crate::types::{Colour, Move};

/// 探索・盤面操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// 探索が外部から中断された
    ///
    /// 部分的なスコアは信頼できないため、値ではなくエラーで伝播する。
    #[error("search aborted by supervisor")]
    Aborted,

    /// 非合法手の適用（埋まったセルへの着手等）
    #[error("illegal move {mv:?} for side {side}")]
    IllegalMove {
        /// 問題の指し手
        mv: Move,
        /// 着手しようとした手番
        side: Colour,
    },

    /// 合法手のない局面でルート探索が呼ばれた
    ///
    /// ゲームオーバー／パス判定は再帰の一段上で解決しておくこと。
    #[error("search root entered with no legal moves")]
    NoLegalMoves,

    /// 定跡データの解析失敗
    #[error("invalid opening book data: {0}")]
    InvalidBook(String),
}
