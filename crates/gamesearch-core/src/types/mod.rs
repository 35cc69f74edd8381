//! 基本型（Colour, Value, Move, Cell, Depth）

mod colour;
mod moves;
mod value;

pub use colour::Colour;
pub use moves::{Cell, CellList, Move, MoveList};
pub use value::Value;

/// 探索深さ
pub type Depth = i32;

/// 探索深さの上限
///
/// killerテーブル等の固定長配列はこの値でサイズが決まる。
pub const MAX_DEPTH: Depth = 64;
