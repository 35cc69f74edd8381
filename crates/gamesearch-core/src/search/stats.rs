//! 探索統計
//!
//! 反復深化の評価数バジェット判定と、枝刈りの効き具合の観測に使う
//! 軽量カウンタ。トップレベル探索ごとにリセットされる。

/// 探索統計カウンタ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 訪問ノード数
    pub nodes: u64,
    /// 葉の静的評価回数
    pub leaf_evaluations: u64,
    /// alpha-betaカットオフ回数
    pub cutoffs: u64,
    /// negascoutのフルウィンドウ再探索回数
    pub researches: u64,
}

impl SearchStats {
    /// ゼロクリアされた統計
    pub fn new() -> Self {
        SearchStats::default()
    }
}
