//! Negamax探索
//!
//! minimaxの各plyで子のスコアを符号反転して手番を入れ替える形
//! （value(player) = -value(opponent)）。max/minの経路を分けずに済む。
//!
//! `use_alpha_beta` でalpha-beta刈りを切り替えられる。無効時は全兄弟を
//! 訪問する。刈りが選択結果を変えないことの検証はこのモードとの比較で
//! 行う。カットオフを起こした手はランカーへ報告され、killer候補になる。

use std::sync::Arc;

use log::{debug, trace};

use crate::board::Board;
use crate::context::GameContext;
use crate::error::SearchError;
use crate::eval::Evaluator;
use crate::library::OpeningLibrary;
use crate::movepick::{order_moves, MoveRanker};
use crate::search::{MoveSearch, SearchProgressListener, SearchSignal, SearchStats};
use crate::types::{Depth, Move, Value, MAX_DEPTH};

/// Negamax探索器
pub struct NegamaxSearcher<B: Board, E: Evaluator<B>> {
    context: Arc<GameContext<B>>,
    evaluator: E,
    library: Option<Box<dyn OpeningLibrary<B>>>,
    listeners: Vec<Box<dyn SearchProgressListener>>,
    signal: SearchSignal,
    /// alpha-beta刈りの有効フラグ（無効時は全兄弟を探索する検証モード）
    use_alpha_beta: bool,
    /// 合法手ゼロの側をパスさせるか（無効時は葉として採点する）
    bye_allowed: bool,
    best_score: Value,
    stats: SearchStats,
    /// 実行中探索のトップレベル深さ
    search_depth: Depth,
}

impl<B: Board, E: Evaluator<B>> NegamaxSearcher<B, E> {
    /// alpha-beta刈り有効の探索器を生成する
    pub fn new(context: Arc<GameContext<B>>, evaluator: E) -> Self {
        NegamaxSearcher {
            context,
            evaluator,
            library: None,
            listeners: Vec::new(),
            signal: SearchSignal::new(),
            use_alpha_beta: true,
            bye_allowed: false,
            best_score: Value::NONE,
            stats: SearchStats::new(),
            search_depth: 0,
        }
    }

    /// alpha-beta刈りの有効/無効を設定する
    pub fn set_alpha_beta(&mut self, enabled: bool) -> &mut Self {
        self.use_alpha_beta = enabled;
        self
    }

    /// bye（パス）の可否を設定する
    pub fn set_bye_allowed(&mut self, allowed: bool) -> &mut Self {
        self.bye_allowed = allowed;
        self
    }

    /// 定跡ライブラリを設定する
    pub fn set_library(&mut self, library: Box<dyn OpeningLibrary<B>>) -> &mut Self {
        self.library = Some(library);
        self
    }

    /// ゲームコンテキスト
    pub fn context(&self) -> &Arc<GameContext<B>> {
        &self.context
    }

    fn notify<F: FnMut(&mut dyn SearchProgressListener)>(&mut self, mut f: F) {
        // 中断後はいかなる進捗コールバックも発火させない
        if self.signal.is_stopped() {
            return;
        }
        for listener in self.listeners.iter_mut() {
            f(listener.as_mut());
        }
    }

    fn evaluate_leaf(&mut self, start: &B, board: &B, ply: Depth) -> Value {
        let value = self.evaluator.score(start, board, ply, self.search_depth);
        self.stats.leaf_evaluations += 1;
        self.notify(|l| l.on_leaf_evaluation(ply, value));
        value
    }

    /// 指し手を適用した子局面の（符号反転済み）値を求める
    ///
    /// スクラッチ盤面はプールから借り、エラー経路でも必ず返却する。
    fn child_value(
        &mut self,
        start: &B,
        parent: &B,
        mv: Move,
        ranker: &mut dyn MoveRanker<B>,
        remaining: Depth,
        ply: Depth,
        alpha: Value,
        beta: Value,
    ) -> Result<Value, SearchError> {
        let mut scratch = self.context.lend();
        scratch.copy_from(parent);
        let result = match scratch.play_move(mv) {
            Ok(_) => {
                self.search_node(start, &scratch, ranker, remaining - 1, ply + 1, -beta, -alpha)
            }
            Err(e) => Err(e),
        };
        self.context.reclaim(scratch);
        result.map(|v| -v)
    }

    fn search_node(
        &mut self,
        start: &B,
        board: &B,
        ranker: &mut dyn MoveRanker<B>,
        remaining: Depth,
        ply: Depth,
        mut alpha: Value,
        beta: Value,
    ) -> Result<Value, SearchError> {
        // ノードごとに最低1回の中断ポーリング。観測したら通知なしで巻き戻る。
        if self.signal.is_stopped() {
            return Err(SearchError::Aborted);
        }
        self.stats.nodes += 1;

        if remaining <= 0 || board.is_over() {
            return Ok(self.evaluate_leaf(start, board, ply));
        }

        let mut moves = self.context.new_move_list();
        board.legal_moves(&mut moves);
        if moves.is_empty() {
            if self.bye_allowed {
                // 手番だけ交代して1ply深く潜る
                let mut scratch = self.context.lend();
                scratch.copy_from(board);
                scratch.pass();
                let result = self.search_node(
                    start,
                    &scratch,
                    ranker,
                    remaining - 1,
                    ply + 1,
                    -beta,
                    -alpha,
                );
                self.context.reclaim(scratch);
                return result.map(|v| -v);
            }
            // bye禁止: 手詰まりの解決は再帰の一段上の責務。ここでは葉として採点する。
            return Ok(self.evaluate_leaf(start, board, ply));
        }

        order_moves(&*ranker, board, ply, &mut moves);

        let mut best = -Value::INFINITE;
        for &mv in &moves {
            self.notify(|l| l.on_branch(ply, mv));
            let value =
                self.child_value(start, board, mv, ranker, remaining, ply, alpha, beta)?;
            if value > best {
                best = value;
                self.notify(|l| l.on_node_evaluation(ply, mv, value));
            }
            if self.use_alpha_beta {
                if best > alpha {
                    alpha = best;
                }
                if alpha >= beta {
                    // 残りの兄弟は結果に影響しない。カットオフを起こした手を
                    // killer候補としてランカーへ報告する。
                    self.stats.cutoffs += 1;
                    ranker.on_node_evaluation(mv, ply);
                    trace!("cutoff at ply {ply} by {mv:?}");
                    break;
                }
            }
        }
        Ok(best)
    }
}

impl<B: Board, E: Evaluator<B>> MoveSearch<B> for NegamaxSearcher<B, E> {
    fn find_move(
        &mut self,
        board: &B,
        ranker: &mut dyn MoveRanker<B>,
        depth: Depth,
    ) -> Result<Move, SearchError> {
        assert!((1..=MAX_DEPTH).contains(&depth), "search depth out of range: {depth}");
        if self.signal.is_stopped() {
            return Err(SearchError::Aborted);
        }
        self.stats = SearchStats::new();
        self.best_score = Value::NONE;
        self.search_depth = depth;

        let mut moves = self.context.new_move_list();
        board.legal_moves(&mut moves);
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        // 定跡が手を供出したら木歩きを丸ごと省略する
        if let Some(library) = self.library.as_mut() {
            if library.should_use_library(board, depth) {
                if let Some(mv) = library.find_move(board, depth) {
                    debug!("library move {mv:?} at depth {depth}, search bypassed");
                    return Ok(mv);
                }
            }
        }

        self.notify(|l| l.on_search_start(depth));
        order_moves(&*ranker, board, 0, &mut moves);

        let mut alpha = -Value::INFINITE;
        let beta = Value::INFINITE;
        let mut best = -Value::INFINITE;
        let mut best_move = Move::NONE;
        for &mv in &moves {
            self.notify(|l| l.on_branch(0, mv));
            let value = self.child_value(board, board, mv, ranker, depth, 0, alpha, beta)?;
            if value > best {
                best = value;
                best_move = mv;
                self.notify(|l| l.on_node_evaluation(0, mv, value));
            }
            if self.use_alpha_beta && best > alpha {
                alpha = best;
            }
        }

        self.best_score = best;
        let leaves = self.stats.leaf_evaluations;
        debug!(
            "negamax depth {depth}: best {best_move:?} score {} ({} nodes, {leaves} leaves)",
            best.raw(),
            self.stats.nodes,
        );
        self.notify(|l| l.on_iteration_end(depth, best_move, best, leaves));
        self.notify(|l| l.on_search_end());
        Ok(best_move)
    }

    fn best_move_score(&self) -> Value {
        self.best_score
    }

    fn signal(&self) -> SearchSignal {
        self.signal.clone()
    }

    fn add_progress_listener(&mut self, listener: Box<dyn SearchProgressListener>) {
        self.listeners.push(listener);
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
