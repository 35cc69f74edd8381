//! 指し手オーダリング（MoveRanker）
//!
//! Alpha-Beta系探索の効率を最大化するため、カットオフを起こしやすい手を
//! 先に返す。全合法手を各ノードで1回ランク付けして降順ソートする方式
//! （分岐因子が小さいゲームでは優先度キューより安い）。
//!
//! ランク付けは合法性に影響しない。オーダリングが変わるのは探索の手間
//! だけで、選ばれる手とスコアは変わらない。

mod killer;

pub use killer::{KillerRanker, KillerTable, KILLER_BONUS, KILLER_SLOTS};

use smallvec::SmallVec;

use crate::board::Board;
use crate::types::{Depth, Move, MoveList};

/// 指し手ランカー契約
///
/// `rank` が大きい手ほど先に試される。ゲームごとのランカーは静的な
/// 位置バイアスを符号化する。killerデコレータは任意のベースランカーを
/// 包んで、カットオフ実績のある手に大きなボーナスを加える。
pub trait MoveRanker<B: Board> {
    /// 指し手のランクを返す（大きいほど先に試す）
    fn rank(&self, mv: Move, board: &B, depth: Depth) -> i32;

    /// 探索からのカットオフ報告
    ///
    /// `mv` が深さ `depth` でカットオフを起こしたときに探索側が呼ぶ。
    /// 既定は無視。
    fn on_node_evaluation(&mut self, _mv: Move, _depth: Depth) {}

    /// 独立したトップレベル探索の間で状態をクリアする
    ///
    /// 反復深化の各深さ間では呼ばれない（オーダリング情報の再利用のため、
    /// リセットはトップレベルの呼び出し側の責務）。既定は無視。
    fn reset(&mut self) {}
}

/// すべての手を同ランクとするランカー
///
/// オーダリングが結果を変えないことの検証用ベースライン。
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformRanker;

impl<B: Board> MoveRanker<B> for UniformRanker {
    #[inline]
    fn rank(&self, _mv: Move, _board: &B, _depth: Depth) -> i32 {
        0
    }
}

/// 合法手リストをランク降順に並べ替える
///
/// 各手のランクを1回だけ評価し、安定ソートする。同ランクの手の相対順は
/// 生成順のまま保たれるため、ランカーが同じなら探索器間で同一の訪問順に
/// なる。
pub fn order_moves<B: Board>(
    ranker: &dyn MoveRanker<B>,
    board: &B,
    depth: Depth,
    moves: &mut MoveList,
) {
    if moves.len() < 2 {
        return;
    }
    let mut ranked: SmallVec<[(i32, Move); 64]> =
        moves.iter().map(|&mv| (ranker.rank(mv, board, depth), mv)).collect();
    ranked.sort_by_key(|&(rank, _)| std::cmp::Reverse(rank));
    for (slot, (_, mv)) in moves.iter_mut().zip(ranked) {
        *slot = mv;
    }
}
