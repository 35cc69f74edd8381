//! 指し手（Move）とセル（Cell）
//!
//! 指し手のペイロードエンコーディングはゲーム側が定義する。エンジンは
//! 値としての同一性（`==`）と `Move::NONE` 番兵のみに依存する。

use smallvec::SmallVec;

/// 指し手
///
/// 1つの合法遷移を指名する不変値。エンコーディングはゲーム依存の32bit。
/// 等しい指し手は `MoveCatalog` を通じて同一のインデックスを共有する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Move(u32);

impl Move {
    /// 無効な指し手（番兵）
    pub const NONE: Move = Move(u32::MAX);

    /// 値から生成
    #[inline]
    pub const fn new(raw: u32) -> Move {
        Move(raw)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// 有効な指し手かどうか
    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NONE
    }
}

/// セル識別子
///
/// `play_move` の変更セルリストで報告される。再描画用であり探索は参照しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Cell(u16);

impl Cell {
    /// 値から生成
    #[inline]
    pub const fn new(raw: u16) -> Cell {
        Cell(raw)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// 指し手リスト
///
/// 分岐因子が小さいゲームを想定し、インライン容量でヒープ割り当てを回避する。
pub type MoveList = SmallVec<[Move; 64]>;

/// 変更セルリスト
pub type CellList = SmallVec<[Cell; 8]>;
