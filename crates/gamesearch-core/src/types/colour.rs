//! 手番（Colour）

use std::fmt;

/// 手番・陣営
///
/// 2人ゲームの両陣営を表す閉じた2値列挙。値比較で同一性が決まるため、
/// 陣営ごとのシングルトン登録は不要。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Colour {
    /// 先手側
    Light = 0,
    /// 後手側
    Dark = 1,
}

impl Colour {
    /// 陣営数
    pub const NUM: usize = 2;

    /// 相手陣営を返す
    #[inline]
    pub const fn flip(self) -> Colour {
        match self {
            Colour::Light => Colour::Dark,
            Colour::Dark => Colour::Light,
        }
    }

    /// 配列インデックス
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 表示用シンボル
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Colour::Light => 'o',
            Colour::Dark => 'x',
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
