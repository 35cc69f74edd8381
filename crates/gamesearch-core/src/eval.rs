//! 静的評価契約（Evaluator）

use crate::board::Board;
use crate::types::{Depth, Value};

/// 静的評価契約
///
/// `board` を現手番側の視点から採点する。ゼロサムであること:
/// 同一局面を相手視点で採点した値はちょうど符号反転になる。
///
/// 決着スコアは終局までのply数が増えるほど絶対値を縮めること
/// （`Value::win_in(current_depth)` / `Value::loss_in(current_depth)` を
/// 使えば自動的に満たされる）。これにより、早く見つかる勝ちは同じ勝ちを
/// 遅く見つけるより常に上位になり、遅い負けは早い負けより上位になる。
pub trait Evaluator<B: Board>: Send {
    /// 局面を採点する
    ///
    /// - `start`: 探索ルートの局面（位置的な文脈が要る評価器用）
    /// - `board`: 採点対象の局面
    /// - `current_depth`: ルートからのply数
    /// - `search_depth`: この探索の最大深さ
    fn score(&self, start: &B, board: &B, current_depth: Depth, search_depth: Depth) -> Value;
}
