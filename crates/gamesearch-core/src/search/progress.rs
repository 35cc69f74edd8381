//! 探索進捗リスナー（SearchProgressListener）
//!
//! 木歩きイベントの観測者。探索器ごとに0個以上アタッチでき、すべて
//! ワーカースレッド上から同期的に呼ばれる。中断フラグの観測後は
//! 一切呼ばれない。

use crate::types::{Depth, Move, Value};

/// 探索進捗リスナー契約
///
/// すべてのメソッドに空の既定実装がある。必要なイベントだけ上書きする。
/// `depth` はルートからのply数（ルート=0）。
pub trait SearchProgressListener: Send {
    /// トップレベル探索（または反復深化の1イテレーション）の開始
    fn on_search_start(&mut self, _depth: Depth) {}

    /// 候補手の枝へ降りる直前
    fn on_branch(&mut self, _depth: Depth, _mv: Move) {}

    /// 葉の静的評価
    fn on_leaf_evaluation(&mut self, _depth: Depth, _value: Value) {}

    /// ノードでの暫定最善手の更新
    fn on_node_evaluation(&mut self, _depth: Depth, _mv: Move, _value: Value) {}

    /// 1イテレーションの正常完了（中断時は呼ばれない）
    fn on_iteration_end(&mut self, _depth: Depth, _mv: Move, _value: Value, _leaf_count: u64) {}

    /// トップレベル探索の正常終了
    fn on_search_end(&mut self) {}
}
