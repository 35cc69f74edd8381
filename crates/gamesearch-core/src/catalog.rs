//! 指し手カタログ（MoveCatalog）
//!
//! ゲームごとの正準指し手テーブル。等しい指し手は同じインデックスを共有し、
//! killerリストの所属判定や厳密比較がインデックス比較で済む。
//! ゲームセットアップ後は実質append-onlyで、ワーカースレッドからロックなしで
//! 読み出せる。

use std::collections::HashMap;

use crate::types::{Move, MoveList};

/// 指し手カタログ
#[derive(Debug, Default)]
pub struct MoveCatalog {
    moves: Vec<Move>,
    index: HashMap<Move, usize>,
}

impl MoveCatalog {
    /// 空のカタログを生成する
    pub fn new() -> Self {
        MoveCatalog::default()
    }

    /// 指し手を登録し、正準インデックスを返す
    ///
    /// 登録済みの指し手は既存インデックスをそのまま返す（重複なし）。
    pub fn register(&mut self, mv: Move) -> usize {
        if let Some(&idx) = self.index.get(&mv) {
            return idx;
        }
        let idx = self.moves.len();
        self.moves.push(mv);
        self.index.insert(mv, idx);
        idx
    }

    /// 指し手の正準インデックスを引く
    #[inline]
    pub fn index_of(&self, mv: Move) -> Option<usize> {
        self.index.get(&mv).copied()
    }

    /// インデックスから指し手を引く
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    /// 登録済み指し手の数
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// 指し手リストコンテナを構築する
    ///
    /// 呼び出し側が具体的なコンテナ型に依存しないための窓口。
    pub fn new_move_list(&self) -> MoveList {
        MoveList::new()
    }

    /// 登録済み指し手のイテレータ
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }
}
