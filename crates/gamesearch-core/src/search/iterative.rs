//! 反復深化（Iterative Deepening）
//!
//! 単発探索器を深さ1..maxDepthで繰り返し駆動する。深いイテレーションは
//! killerテーブル経由で浅いイテレーションのオーダリング情報を再利用し、
//! 中断されても「最後に完了した深さの手」がいつでも取り出せる
//! （any-time・graceful degradation）。
//!
//! 各イテレーション後、その葉評価数が `evaluation_threshold` を超えて
//! いたらそのイテレーションは未完了（`threshold_reached`）とみなして
//! 結果を破棄し、深化を打ち切る。深さ1の結果だけは常にフロアとして
//! 保持される。

use log::debug;

use crate::board::Board;
use crate::error::SearchError;
use crate::library::OpeningLibrary;
use crate::movepick::MoveRanker;
use crate::search::{MoveSearch, SearchProgressListener, SearchSignal, SearchStats};
use crate::types::{Depth, Move, Value, MAX_DEPTH};

/// 評価数バジェット無効の番兵
pub const EVALUATION_THRESHOLD_DISABLED: u64 = 0;

/// 反復深化探索器
///
/// 1つの単発探索器と、任意の定跡ライブラリを包む。
pub struct IterativeSearcher<B: Board, S: MoveSearch<B>> {
    searcher: S,
    library: Option<Box<dyn OpeningLibrary<B>>>,
    best_move: Move,
    best_score: Value,
    completed_depth: Depth,
    threshold_reached: bool,
}

impl<B: Board, S: MoveSearch<B>> IterativeSearcher<B, S> {
    /// 単発探索器を包む
    pub fn new(searcher: S) -> Self {
        IterativeSearcher {
            searcher,
            library: None,
            best_move: Move::NONE,
            best_score: Value::NONE,
            completed_depth: 0,
            threshold_reached: false,
        }
    }

    /// 定跡ライブラリを設定する
    pub fn set_library(&mut self, library: Box<dyn OpeningLibrary<B>>) -> &mut Self {
        self.library = Some(library);
        self
    }

    /// 最善手を反復深化で探索する
    ///
    /// 深さ1..=`max_depth` を順に探索し、最も深い**完了した**
    /// イテレーションの手を返す。各深さの前に定跡ライブラリが
    /// イテレーション全体を短絡できる。
    ///
    /// `evaluation_threshold` は葉評価数のバジェット
    /// （`EVALUATION_THRESHOLD_DISABLED` で無効）。超過イテレーションの
    /// 結果は破棄されるが、深さ1の結果は常にフロアとして残る。
    ///
    /// 中断時は `SearchError::Aborted` で失敗する（そのサイクルは
    /// 「手なし」であり、呼び出し側はリトライ可能として扱う）。
    pub fn find_move(
        &mut self,
        board: &B,
        ranker: &mut dyn MoveRanker<B>,
        max_depth: Depth,
        evaluation_threshold: u64,
    ) -> Result<Move, SearchError> {
        assert!((1..=MAX_DEPTH).contains(&max_depth), "search depth out of range: {max_depth}");
        self.best_move = Move::NONE;
        self.best_score = Value::NONE;
        self.completed_depth = 0;
        self.threshold_reached = false;

        // トップレベル探索の開始。killer等のオーダリング状態はここで
        // 一度だけクリアし、以後のイテレーション間では持ち越す。
        ranker.reset();

        for depth in 1..=max_depth {
            if let Some(library) = self.library.as_mut() {
                if library.should_use_library(board, depth) {
                    if let Some(mv) = library.find_move(board, depth) {
                        debug!("library move {mv:?}, iteration at depth {depth} bypassed");
                        self.best_move = mv;
                        self.best_score = Value::NONE;
                        self.completed_depth = depth;
                        return Ok(mv);
                    }
                }
            }

            // 中断はここからErrで伝播する。完了済みイテレーションの結果を
            // 返り値として流用してはならない（このサイクルは手なし）。
            let mv = self.searcher.find_move(board, ranker, depth)?;
            let stats = self.searcher.stats();

            if depth > 1
                && evaluation_threshold != EVALUATION_THRESHOLD_DISABLED
                && stats.leaf_evaluations > evaluation_threshold
            {
                // バジェット超過。このイテレーションは未完了扱いで破棄。
                self.threshold_reached = true;
                debug!(
                    "depth {depth} exceeded evaluation threshold ({} > {evaluation_threshold}), \
                     keeping depth {} result",
                    stats.leaf_evaluations, self.completed_depth
                );
                break;
            }

            self.best_move = mv;
            self.best_score = self.searcher.best_move_score();
            self.completed_depth = depth;
            debug!(
                "iteration depth {depth} complete: {mv:?} score {} ({} leaves)",
                self.best_score.raw(),
                stats.leaf_evaluations
            );
        }

        Ok(self.best_move)
    }

    /// 最も深い完了イテレーションの手のスコア
    ///
    /// 正常リターンの後でのみ有効。
    pub fn best_move_score(&self) -> Value {
        self.best_score
    }

    /// 最後に完了したイテレーションの深さ
    pub fn completed_depth(&self) -> Depth {
        self.completed_depth
    }

    /// 直近の探索で評価数バジェットに達したか
    pub fn threshold_reached(&self) -> bool {
        self.threshold_reached
    }

    /// 中断シグナルハンドル（内側の探索器と共有）
    pub fn signal(&self) -> SearchSignal {
        self.searcher.signal()
    }

    /// 実行中の探索を中断する
    pub fn abort_search(&self) {
        self.searcher.abort_search();
    }

    /// 中断が要求されているか
    pub fn is_aborted(&self) -> bool {
        self.searcher.is_aborted()
    }

    /// 進捗リスナーを追加する（内側の探索器に委譲）
    pub fn add_progress_listener(&mut self, listener: Box<dyn SearchProgressListener>) {
        self.searcher.add_progress_listener(listener);
    }

    /// 直近イテレーションの統計（内側の探索器のもの）
    pub fn stats(&self) -> SearchStats {
        self.searcher.stats()
    }

    /// 内側の探索器への参照
    pub fn inner(&self) -> &S {
        &self.searcher
    }
}
