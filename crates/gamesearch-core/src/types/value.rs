//! 評価値（Value）
//!
//! `Value::WIN` 付近を決着スコアとして予約する。通常のヒューリスティック
//! 評価値は主に [-WIN_IN_MAX_PLY, WIN_IN_MAX_PLY] の範囲で用いる。
//! 早い勝ちほど大きく、遅い負けほど大きい（= まし）という順序を
//! `win_in` / `loss_in` のply減算で実現している。

use crate::types::MAX_DEPTH;

/// 評価値
///
/// 通常の局面評価と決着表現（`win_in` / `loss_in` 系）を同一の整数
/// スケールで扱う。`is_decided` と `plies_to_end` により、決着スコアか
/// どうかと残り手数の復元が可能。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 引き分け
    pub const DRAW: Value = Value(0);
    /// 勝ち（勝ち側の最大スコア）
    pub const WIN: Value = Value(32000);
    /// 無限大（探索窓の初期値用）
    pub const INFINITE: Value = Value(32001);
    /// 無効値
    pub const NONE: Value = Value(32002);

    /// 最大探索深度内での勝ちスコア
    pub const WIN_IN_MAX_PLY: Value = Value(Self::WIN.0 - 2 * MAX_DEPTH);
    /// 最大探索深度内での負けスコア
    pub const LOSS_IN_MAX_PLY: Value = Value(-Self::WIN_IN_MAX_PLY.0);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// ply手先で勝つスコア
    ///
    /// 同じ勝ちでも手数が短いほど大きい。
    #[inline]
    pub const fn win_in(ply: i32) -> Value {
        Value(Self::WIN.0 - ply)
    }

    /// ply手先で負けるスコア
    ///
    /// 同じ負けでも手数が長いほど大きい（粘る側が選好される）。
    #[inline]
    pub const fn loss_in(ply: i32) -> Value {
        Value(-Self::WIN.0 + ply)
    }

    /// 勝ちスコアかどうか
    #[inline]
    pub const fn is_win(self) -> bool {
        self.0 >= Self::WIN_IN_MAX_PLY.0
    }

    /// 負けスコアかどうか
    #[inline]
    pub const fn is_loss(self) -> bool {
        self.0 <= Self::LOSS_IN_MAX_PLY.0
    }

    /// 決着スコア（勝ちまたは負け）かどうか
    #[inline]
    pub const fn is_decided(self) -> bool {
        self.is_win() || self.is_loss()
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// 決着までの手数を取得（決着スコアの場合のみ有効）
    #[inline]
    pub const fn plies_to_end(self) -> i32 {
        if self.is_win() {
            Self::WIN.0 - self.0
        } else if self.is_loss() {
            self.0 + Self::WIN.0
        } else {
            0
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: Value) -> Value {
        Value(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Value {
    #[inline]
    fn add_assign(&mut self, rhs: Value) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Value {
    #[inline]
    fn sub_assign(&mut self, rhs: Value) {
        self.0 -= rhs.0;
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value(v)
    }
}

impl From<Value> for i32 {
    fn from(v: Value) -> i32 {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_constants() {
        assert_eq!(Value::ZERO.raw(), 0);
        assert_eq!(Value::DRAW.raw(), 0);
        assert_eq!(Value::WIN.raw(), 32000);
        assert_eq!(Value::INFINITE.raw(), 32001);
        assert_eq!(Value::NONE.raw(), 32002);
    }

    #[test]
    fn test_win_in() {
        let v = Value::win_in(5);
        assert!(v.is_win());
        assert!(!v.is_loss());
        assert!(v.is_decided());
        assert_eq!(v.plies_to_end(), 5);
    }

    #[test]
    fn test_loss_in() {
        let v = Value::loss_in(3);
        assert!(!v.is_win());
        assert!(v.is_loss());
        assert!(v.is_decided());
        assert_eq!(v.plies_to_end(), 3);
    }

    #[test]
    fn test_sooner_win_outranks_later_win() {
        assert!(Value::win_in(1) > Value::win_in(10));
        assert!(Value::loss_in(10) > Value::loss_in(1));
        assert!(Value::win_in(MAX_DEPTH) > Value::ZERO);
        assert!(Value::ZERO > Value::loss_in(MAX_DEPTH));
    }

    #[test]
    fn test_negation_is_zero_sum() {
        assert_eq!(-Value::win_in(4), Value::loss_in(4));
        assert_eq!(-Value::ZERO, Value::ZERO);
        assert_eq!(-Value::new(123), Value::new(-123));
    }

    #[test]
    fn test_heuristic_range_is_not_decided() {
        assert!(!Value::new(1000).is_decided());
        assert!(!Value::new(-1000).is_decided());
    }
}
