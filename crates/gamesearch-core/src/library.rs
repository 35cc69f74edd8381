//! 定跡ライブラリ（OpeningLibrary）
//!
//! 序盤の既知局面では木探索を丸ごと省略する。契約は2段構え:
//! `should_use_library` を探索（反復深化なら各イテレーション）の前に
//! 1回だけ確認し、trueなら `find_move` が定跡手を供出する。
//!
//! 同梱の `OpeningBook` は局面キーで引く具体実装。エントリはJSONテキスト
//! から読み込む（ファイルI/Oはシェル側の仕事で、エンジンは文字列しか
//! 受け取らない）。複数の継続手からはシード付き乱数で一様に選ぶ。

use std::collections::HashMap;
use std::fmt;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::SearchError;
use crate::types::{Depth, Move, MoveList};

/// 定跡ライブラリ契約
pub trait OpeningLibrary<B: Board>: Send {
    /// この局面・深さでライブラリを使うべきか
    ///
    /// 木探索を始める前に1回だけ確認される。
    fn should_use_library(&self, board: &B, depth: Depth) -> bool;

    /// 定跡手を供出する
    ///
    /// 供出された手は探索を完全にバイパスする。エントリがあっても
    /// 合法手でなければ `None`（その場合は通常探索に落ちる）。
    fn find_move(&mut self, board: &B, depth: Depth) -> Option<Move>;
}

/// 定跡エントリ（JSON表現）
///
/// `key` は呼び出し側提供のハッシュ関数による局面キー。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookEntry {
    /// 局面キー
    pub key: u64,
    /// この局面からの継続手（生エンコーディング）
    pub moves: Vec<u32>,
}

/// 局面キー関数
pub type BoardKeyFn<B> = Box<dyn Fn(&B) -> u64 + Send>;

/// 局面キーで引く定跡ブック
pub struct OpeningBook<B: Board> {
    entries: HashMap<u64, Vec<Move>>,
    /// この着手数以降はブックを引かない
    max_ply: u32,
    key_fn: BoardKeyFn<B>,
    rng: Xoshiro256PlusPlus,
}

impl<B: Board> OpeningBook<B> {
    /// JSONテキストからブックを構築する
    ///
    /// `seed` は継続手選択の再現性用。
    pub fn from_json(
        json: &str,
        max_ply: u32,
        key_fn: BoardKeyFn<B>,
        seed: u64,
    ) -> Result<Self, SearchError> {
        let raw: Vec<BookEntry> =
            serde_json::from_str(json).map_err(|e| SearchError::InvalidBook(e.to_string()))?;
        let mut entries = HashMap::with_capacity(raw.len());
        for entry in raw {
            if entry.moves.is_empty() {
                return Err(SearchError::InvalidBook(format!(
                    "entry {:#x} has no moves",
                    entry.key
                )));
            }
            let moves: Vec<Move> = entry.moves.into_iter().map(Move::new).collect();
            entries.insert(entry.key, moves);
        }
        debug!("opening book loaded: {} positions, max_ply={}", entries.len(), max_ply);
        Ok(OpeningBook { entries, max_ply, key_fn, rng: Xoshiro256PlusPlus::seed_from_u64(seed) })
    }

    /// 登録局面数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// key_fn はクロージャなので手書きでスキップする
impl<B: Board> fmt::Debug for OpeningBook<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpeningBook")
            .field("positions", &self.entries.len())
            .field("max_ply", &self.max_ply)
            .finish_non_exhaustive()
    }
}

impl<B: Board> OpeningLibrary<B> for OpeningBook<B> {
    fn should_use_library(&self, board: &B, _depth: Depth) -> bool {
        board.move_count() < self.max_ply && self.entries.contains_key(&(self.key_fn)(board))
    }

    fn find_move(&mut self, board: &B, _depth: Depth) -> Option<Move> {
        let key = (self.key_fn)(board);
        let candidates = self.entries.get(&key)?;

        // ブックが古い可能性に備えて合法手のみ残す
        let mut legal = MoveList::new();
        board.legal_moves(&mut legal);
        let playable: Vec<Move> =
            candidates.iter().copied().filter(|mv| legal.contains(mv)).collect();
        if playable.is_empty() {
            debug!("book hit for key {key:#x} but no legal continuation");
            return None;
        }
        let pick = playable[self.rng.random_range(0..playable.len())];
        debug!("book move {pick:?} for key {key:#x}");
        Some(pick)
    }
}
