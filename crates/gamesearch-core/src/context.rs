//! ゲームコンテキスト（GameContext）
//!
//! コンポジションルート: 指し手カタログと盤面プールを束ねる。
//! 自身は盤面を保持せず、貸し出しと回収のみを行う。ゲームセッションの
//! 寿命にわたって共有され（read-mostly）、個々の探索より長生きする。
//!
//! プールは `Mutex` 越しに触る。ワーカーが checkout/checkin する瞬間しか
//! 競合せず、監督スレッドは手と手の合間にしか読まない。

use std::sync::Mutex;

use crate::board::Board;
use crate::catalog::MoveCatalog;
use crate::pool::BoardPool;
use crate::types::MoveList;

/// ゲームコンテキスト
#[derive(Debug)]
pub struct GameContext<B: Board> {
    catalog: MoveCatalog,
    pool: Mutex<BoardPool<B>>,
}

impl<B: Board> GameContext<B> {
    /// プロトタイプ盤面とカタログからコンテキストを生成する
    pub fn new(prototype: B, catalog: MoveCatalog) -> Self {
        GameContext { catalog, pool: Mutex::new(BoardPool::new(prototype)) }
    }

    /// プールを事前確保付きで生成する
    pub fn with_pool_capacity(prototype: B, catalog: MoveCatalog, capacity: usize) -> Self {
        GameContext {
            catalog,
            pool: Mutex::new(BoardPool::with_capacity(prototype, capacity)),
        }
    }

    /// 盤面を1つ貸し出す
    ///
    /// 内容はダーティ。`initialise` か `copy_from` でリセットして使う。
    #[inline]
    pub fn lend(&self) -> B {
        self.pool.lock().expect("board pool poisoned").check_out()
    }

    /// 盤面を返却する
    #[inline]
    pub fn reclaim(&self, board: B) {
        self.pool.lock().expect("board pool poisoned").check_in(board);
    }

    /// 複数の盤面をまとめて返却する
    pub fn reclaim_all(&self, boards: impl IntoIterator<Item = B>) {
        self.pool.lock().expect("board pool poisoned").check_in_all(boards);
    }

    /// 指し手カタログ
    pub fn catalog(&self) -> &MoveCatalog {
        &self.catalog
    }

    /// 指し手リストコンテナを構築する
    pub fn new_move_list(&self) -> MoveList {
        self.catalog.new_move_list()
    }

    /// プール統計（累計生成数, 貸し出し中）
    pub fn pool_stats(&self) -> (usize, usize) {
        let pool = self.pool.lock().expect("board pool poisoned");
        (pool.created(), pool.outstanding())
    }
}
