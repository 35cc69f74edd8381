//! Negascout探索（Principal Variation Search）
//!
//! alpha-betaの改良。各ノードで最初の子だけフルウィンドウで探索し、
//! 残りの兄弟はゼロ幅のnullウィンドウで「alphaを超えるか」だけを探る。
//! プローブが新しい最善を示唆したときのみフルウィンドウで再探索する。
//! 常時刈りだが、あらゆる入力でalpha-beta negamaxと同一の手・同一の
//! スコアを選ぶ。

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

/// Negascout探索器
pub struct NegascoutSearcher<B: Board, E: Evaluator<B>> {
    context: Arc<GameContext<B>>,
    evaluator: E,
    library: Option<Box<dyn OpeningLibrary<B>>>,
    listeners: Vec<Box<dyn SearchProgressListener>>,
    signal: SearchSignal,
    /// 合法手ゼロの側をパスさせるか（無効時は葉として採点する）
    bye_allowed: bool,
    best_score: Value,
    stats: SearchStats,
    search_depth: Depth,
}

impl<B: Board, E: Evaluator<B>> NegascoutSearcher<B, E> {
    /// 探索器を生成する
    pub fn new(context: Arc<GameContext<B>>, evaluator: E) -> Self {
        NegascoutSearcher {
            context,
            evaluator,
            library: None,
            listeners: Vec::new(),
            signal: SearchSignal::new(),
            bye_allowed: false,
            best_score: Value::NONE,
            stats: SearchStats::new(),
            search_depth: 0,
        }
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
            return Ok(self.evaluate_leaf(start, board, ply));
        }

        order_moves(&*ranker, board, ply, &mut moves);

        let mut best = -Value::INFINITE;
        for (i, &mv) in moves.iter().enumerate() {
            self.notify(|l| l.on_branch(ply, mv));
            let value = if i == 0 {
                // 最初の子（主変化候補）だけフルウィンドウ
                self.child_value(start, board, mv, ranker, remaining, ply, alpha, beta)?
            } else {
                // nullウィンドウで「alphaを超えるか」だけ探る
                let null_beta = Value::new(alpha.raw() + 1);
                let probe = self
                    .child_value(start, board, mv, ranker, remaining, ply, alpha, null_beta)?;
                if probe > alpha && probe < beta && remaining > 1 {
                    // 新しい最善の示唆。フルウィンドウで正確な値を取り直す。
                    self.stats.researches += 1;
                    self.child_value(start, board, mv, ranker, remaining, ply, alpha, beta)?
                } else {
                    probe
                }
            };

            if value > best {
                best = value;
                self.notify(|l| l.on_node_evaluation(ply, mv, value));
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                ranker.on_node_evaluation(mv, ply);
                trace!("cutoff at ply {ply} by {mv:?}");
                break;
            }
        }
        Ok(best)
    }
}

impl<B: Board, E: Evaluator<B>> MoveSearch<B> for NegascoutSearcher<B, E> {
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
        for (i, &mv) in moves.iter().enumerate() {
            self.notify(|l| l.on_branch(0, mv));
            let value = if i == 0 {
                self.child_value(board, board, mv, ranker, depth, 0, alpha, beta)?
            } else {
                let null_beta = Value::new(alpha.raw() + 1);
                let probe =
                    self.child_value(board, board, mv, ranker, depth, 0, alpha, null_beta)?;
                if probe > alpha && probe < beta && depth > 1 {
                    self.stats.researches += 1;
                    self.child_value(board, board, mv, ranker, depth, 0, alpha, beta)?
                } else {
                    probe
                }
            };
            if value > best {
                best = value;
                best_move = mv;
                self.notify(|l| l.on_node_evaluation(0, mv, value));
            }
            if best > alpha {
                alpha = best;
            }
        }

        self.best_score = best;
        let leaves = self.stats.leaf_evaluations;
        debug!(
            "negascout depth {depth}: best {best_move:?} score {} ({} nodes, {} re-searches)",
            best.raw(),
            self.stats.nodes,
            self.stats.researches
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
