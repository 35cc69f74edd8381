//! 盤面契約（Board）
//!
//! ゲームごとの盤面表現・合法手・遷移規則をひとつのトレイトに集約する。
//! 深い継承階層の代わりに、ゲームごとに1回実装する明示的な能力契約。
//!
//! ## 不変条件
//!
//! - 手番は常にちょうど1人（`side_to_move`）。
//! - `is_over` は `play_move` に対して単調（falseに戻らない）。
//! - `copy_from` は観測可能な全フィールドを複製し、プール上の由来に
//!   依存しない等価性を持つ。
//! - `recycle` はキャッシュ済み派生状態（勝者・勝ちライン・履歴）を
//!   すべてクリアする。再利用で前のゲームの状態が漏れてはならない。

use crate::error::SearchError;
use crate::types::{CellList, Colour, Move, MoveList};

/// 盤面契約
///
/// インスタンスのライフサイクル: `BoardPool` からダーティな状態で貸し出され、
/// `initialise` でリセット、`play_move` でインプレース変更、`check_in` 経由で
/// `recycle` が呼ばれて返却される。
pub trait Board: Clone + PartialEq + Send + 'static {
    /// 開始局面へ完全リセットする
    fn initialise(&mut self);

    /// 他盤面の観測可能な全状態を複製する
    ///
    /// 既定実装は `clone_from`（割り当て再利用のため `clone` より望ましい）。
    #[inline]
    fn copy_from(&mut self, other: &Self) {
        self.clone_from(other);
    }

    /// 現手番で指し手を適用し、変更されたセルの一覧を返す
    ///
    /// 手番の交代まで含めて行う。非合法手（埋まったセルへの着手等）は
    /// `SearchError::IllegalMove` で即座に失敗する。契約違反であり、
    /// 探索ループが吸収してはならない。
    fn play_move(&mut self, mv: Move) -> Result<CellList, SearchError>;

    /// 現手番の合法手を `out` に列挙する（既存内容はクリアされる）
    ///
    /// 終局後は空を返すこと。
    fn legal_moves(&self, out: &mut MoveList);

    /// 現手番
    fn side_to_move(&self) -> Colour;

    /// 着手せずに手番だけを交代する（bye/パス用）
    ///
    /// `bye_allowed` な探索が、合法手のない側をパスさせる際にのみ呼ぶ。
    fn pass(&mut self);

    /// 終局しているか
    fn is_over(&self) -> bool;

    /// 勝者（決着していなければ `None`）
    fn winner(&self) -> Option<Colour>;

    /// これまでの総着手数
    fn move_count(&self) -> u32;

    /// 最後に適用された指し手
    fn last_move(&self) -> Option<Move>;

    /// プール返却フック
    ///
    /// キャッシュ済み派生状態をすべてクリアする。既定実装は `initialise`
    /// への委譲で、たいていのゲームはそれで十分。
    #[inline]
    fn recycle(&mut self) {
        self.initialise();
    }
}
