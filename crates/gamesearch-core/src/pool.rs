//! 盤面プール（BoardPool）
//!
//! 固定深さ探索は O(分岐^深さ) の局面を訪問する。局面ごとのヒープ割り当ては
//! 実行時間を支配し、思考中のレイテンシに直結するため、盤面は再利用する。
//! checkout はフリーリストから取り出し（なければプロトタイプから生成）、
//! checkin は `recycle` フックを実行してフリーリストへ戻す。
//! 定常状態のホットパスは割り当てフリー。

use log::trace;

use crate::board::Board;

/// 盤面プール
///
/// プールはすべての盤面インスタンスを排他的に所有する。貸し出された盤面は
/// ちょうど1人の呼び出し側に渡り、プール経由でのみ返却される。
/// 貸し出し時の内容はダーティであり、呼び出し側が `initialise` または
/// `copy_from` でリセットする契約。
#[derive(Debug)]
pub struct BoardPool<B: Board> {
    /// 新規インスタンスの雛形
    prototype: B,
    /// 返却済みインスタンス
    free: Vec<B>,
    /// 累計生成数
    created: usize,
    /// 貸し出し中の数
    outstanding: usize,
}

impl<B: Board> BoardPool<B> {
    /// プロトタイプからプールを生成する
    pub fn new(prototype: B) -> Self {
        BoardPool { prototype, free: Vec::new(), created: 0, outstanding: 0 }
    }

    /// 事前確保付きで生成する
    pub fn with_capacity(prototype: B, capacity: usize) -> Self {
        let mut pool = BoardPool::new(prototype);
        pool.free.reserve(capacity);
        for _ in 0..capacity {
            let board = pool.prototype.clone();
            pool.created += 1;
            pool.free.push(board);
        }
        pool
    }

    /// 盤面を1つ貸し出す
    ///
    /// 再利用インスタンスか、枯渇時は新規インスタンスを返す。
    #[inline]
    pub fn check_out(&mut self) -> B {
        self.outstanding += 1;
        match self.free.pop() {
            Some(board) => board,
            None => {
                self.created += 1;
                trace!("board pool grew: created={} outstanding={}", self.created, self.outstanding);
                self.prototype.clone()
            }
        }
    }

    /// 盤面を1つ返却する
    ///
    /// `recycle` を実行してからフリーリストへ戻す。
    #[inline]
    pub fn check_in(&mut self, mut board: B) {
        board.recycle();
        debug_assert!(self.outstanding > 0, "check_in without matching check_out");
        self.outstanding = self.outstanding.saturating_sub(1);
        self.free.push(board);
    }

    /// 複数の盤面をまとめて返却する
    pub fn check_in_all(&mut self, boards: impl IntoIterator<Item = B>) {
        for board in boards {
            self.check_in(board);
        }
    }

    /// 累計生成数
    pub fn created(&self) -> usize {
        self.created
    }

    /// 貸し出し中の数
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// フリーリストの現在長
    pub fn available(&self) -> usize {
        self.free.len()
    }
}
