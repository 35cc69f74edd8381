//! 探索アルゴリズム
//!
//! - `negamax`: 固定深さのNegamax探索（alpha-beta刈りは切替可能）
//! - `negascout`: Principal Variation Search（常時刈り）
//! - `iterative`: 反復深化ラッパ（評価数バジェット付き）
//! - `signal`: 協調的中断プロトコル
//! - `progress`: 木歩きイベントの観測者契約
//! - `stats`: ノード/葉/カットオフのカウンタ
//!
//! 再帰自体はシングルスレッドかつ同期的で、並列木探索は行わない。
//! 中断はワーカー/監督スレッド境界でのみ発生する（§`signal`）。

mod iterative;
mod negamax;
mod negascout;
mod progress;
mod signal;
mod stats;

pub use iterative::{IterativeSearcher, EVALUATION_THRESHOLD_DISABLED};
pub use negamax::NegamaxSearcher;
pub use negascout::NegascoutSearcher;
pub use progress::SearchProgressListener;
pub use signal::SearchSignal;
pub use stats::SearchStats;

use crate::board::Board;
use crate::error::SearchError;
use crate::movepick::MoveRanker;
use crate::types::{Depth, Move, Value};

/// 単発探索器の契約
///
/// 1つの固定深さまで木を探索する。深さの反復は `IterativeSearcher` が
/// この契約の上に組み立てる。
pub trait MoveSearch<B: Board> {
    /// 最善手を探索する
    ///
    /// 中断された場合は `SearchError::Aborted` で失敗する。部分的な
    /// スコアは返さない（信頼できないため）。
    fn find_move(
        &mut self,
        board: &B,
        ranker: &mut dyn MoveRanker<B>,
        depth: Depth,
    ) -> Result<Move, SearchError>;

    /// 直近の `find_move` が選んだ手のスコア
    ///
    /// 正常リターンの後でのみ有効。定跡ライブラリが手を供出した場合は
    /// `Value::NONE`。
    fn best_move_score(&self) -> Value;

    /// 中断シグナルハンドル
    fn signal(&self) -> SearchSignal;

    /// 進捗リスナーを追加する
    fn add_progress_listener(&mut self, listener: Box<dyn SearchProgressListener>);

    /// 直近の探索の統計
    fn stats(&self) -> SearchStats;

    /// 実行中の探索を中断する（任意のスレッドから呼べる）
    fn abort_search(&self) {
        self.signal().request_stop();
    }

    /// 中断が要求されているか
    fn is_aborted(&self) -> bool {
        self.signal().is_stopped()
    }
}
