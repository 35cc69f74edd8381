//! # gamesearch-core
//!
//! 2人・完全情報・ゼロサムのボードゲーム向け汎用ゲーム木探索エンジン。
//! 四目並べ系・配置（ミル）系・リバーシ系など、具体的なゲームモジュールは
//! 本クレートの契約（`Board` / `Evaluator` / `MoveRanker` / ...）を実装して
//! 外から差し込む。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Colour, Value, Move, Cell, Depth）
//! - `board`: 盤面契約
//! - `pool` / `catalog` / `context`: 盤面プール・指し手カタログ・
//!   コンポジションルート
//! - `movepick`: 指し手オーダリングとkillerヒューリスティック
//! - `eval`: 静的評価契約
//! - `library`: 定跡ライブラリ契約と定跡ブック実装
//! - `search`: Negamax / Negascout / 反復深化と中断・進捗プロトコル
//! - `error`: エラー型（中断は第一級のシグナル）

pub mod board;
pub mod catalog;
pub mod context;
pub mod error;
pub mod eval;
pub mod library;
pub mod movepick;
pub mod pool;
pub mod search;
pub mod types;

pub use board::Board;
pub use catalog::MoveCatalog;
pub use context::GameContext;
pub use error::SearchError;
pub use eval::Evaluator;
pub use library::{BookEntry, OpeningBook, OpeningLibrary};
pub use movepick::{KillerRanker, KillerTable, MoveRanker, UniformRanker};
pub use pool::BoardPool;
pub use search::{
    IterativeSearcher, MoveSearch, NegamaxSearcher, NegascoutSearcher, SearchProgressListener,
    SearchSignal, SearchStats, EVALUATION_THRESHOLD_DISABLED,
};
pub use types::{Cell, CellList, Colour, Depth, Move, MoveList, Value, MAX_DEPTH};
