//! Killerヒューリスティック
//!
//! 深さごとに、直近でカットオフを起こした手を小さな固定長リストで保持する。
//! 深さもスロット数も最大探索深度で静的に抑えられるため、一般のコレクション
//! ではなく固定長配列を使う。

use crate::board::Board;
use crate::movepick::MoveRanker;
use crate::types::{Depth, Move, MAX_DEPTH};

/// 深さあたりのkillerスロット数
pub const KILLER_SLOTS: usize = 2;

/// killer該当手に加算されるランクボーナス
///
/// ゲーム側の静的ランクを必ず上回るだけの大きさにしてある。
pub const KILLER_BONUS: i32 = 1 << 20;

/// Killerテーブル
///
/// `[深さ][スロット]` の固定長配列。スロット0が最新。トップレベル探索の
/// 開始時に `clear` される。
#[derive(Debug)]
pub struct KillerTable {
    killers: [[Move; KILLER_SLOTS]; MAX_DEPTH as usize],
}

impl KillerTable {
    /// 空のテーブルを生成する
    pub fn new() -> Self {
        KillerTable { killers: [[Move::NONE; KILLER_SLOTS]; MAX_DEPTH as usize] }
    }

    /// カットオフを起こした手を登録する
    ///
    /// スロット0が最新になるようシフト挿入する。同一手の重複は登録しない。
    pub fn store(&mut self, depth: Depth, mv: Move) {
        if !(0..MAX_DEPTH).contains(&depth) || !mv.is_some() {
            return;
        }
        let slots = &mut self.killers[depth as usize];
        if slots[0] == mv {
            return;
        }
        for i in (1..KILLER_SLOTS).rev() {
            slots[i] = slots[i - 1];
        }
        slots[0] = mv;
    }

    /// 指定深さのkillerかどうか
    #[inline]
    pub fn contains(&self, depth: Depth, mv: Move) -> bool {
        if !(0..MAX_DEPTH).contains(&depth) || !mv.is_some() {
            return false;
        }
        self.killers[depth as usize].contains(&mv)
    }

    /// 指定深さのkillerスロットを取得する（新しい順）
    pub fn get(&self, depth: Depth) -> [Move; KILLER_SLOTS] {
        if !(0..MAX_DEPTH).contains(&depth) {
            return [Move::NONE; KILLER_SLOTS];
        }
        self.killers[depth as usize]
    }

    /// 全深さのリストをクリアする
    pub fn clear(&mut self) {
        self.killers = [[Move::NONE; KILLER_SLOTS]; MAX_DEPTH as usize];
    }
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Killerデコレータ
///
/// 任意のベースランカーを包み、その深さのkillerリストに載っている手へ
/// `KILLER_BONUS` を加算する。合法性には一切影響しない。
/// カットオフ報告（`on_node_evaluation`）でテーブルを更新し、`reset` で
/// テーブルと内側ランカーの両方をクリアする。
#[derive(Debug)]
pub struct KillerRanker<R> {
    inner: R,
    table: KillerTable,
}

impl<R> KillerRanker<R> {
    /// ベースランカーを包む
    pub fn new(inner: R) -> Self {
        KillerRanker { inner, table: KillerTable::new() }
    }

    /// killerテーブルへの参照
    pub fn table(&self) -> &KillerTable {
        &self.table
    }

    /// 内側ランカーへの参照
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<B: Board, R: MoveRanker<B>> MoveRanker<B> for KillerRanker<R> {
    #[inline]
    fn rank(&self, mv: Move, board: &B, depth: Depth) -> i32 {
        let base = self.inner.rank(mv, board, depth);
        if self.table.contains(depth, mv) {
            base + KILLER_BONUS
        } else {
            base
        }
    }

    fn on_node_evaluation(&mut self, mv: Move, depth: Depth) {
        self.table.store(depth, mv);
        self.inner.on_node_evaluation(mv, depth);
    }

    fn reset(&mut self) {
        self.table.clear();
        self.inner.reset();
    }
}
