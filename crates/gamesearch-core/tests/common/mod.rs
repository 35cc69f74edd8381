//! 統合テスト用の具体ゲーム: 7x6の四目落としゲーム
//!
//! エンジン契約（Board / Evaluator / MoveRanker）のリファレンス実装。
//! 指し手は列番号（0..=6）をそのままエンコードする。

#![allow(dead_code)]

use std::sync::Arc;

use smallvec::smallvec;

use gamesearch_core::{
    Board, Cell, CellList, Colour, Depth, Evaluator, GameContext, Move, MoveCatalog, MoveList,
    MoveRanker, SearchError, Value,
};

/// テストログの初期化（`RUST_LOG` 指定時のみ出力される）
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 列数
pub const COLS: usize = 7;
/// 行数
pub const ROWS: usize = 6;

/// 7x6の落としゲーム盤面
///
/// `cells[col][row]`、row 0 が最下段。
#[derive(Debug, Clone, PartialEq)]
pub struct DropBoard {
    cells: [[Option<Colour>; ROWS]; COLS],
    heights: [u8; COLS],
    to_move: Colour,
    over: bool,
    winner: Option<Colour>,
    moves_played: u32,
    last: Move,
}

impl DropBoard {
    pub fn new() -> Self {
        DropBoard {
            cells: [[None; ROWS]; COLS],
            heights: [0; COLS],
            to_move: Colour::Light,
            over: false,
            winner: None,
            moves_played: 0,
            last: Move::NONE,
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Colour> {
        self.cells[col][row]
    }

    pub fn height(&self, col: usize) -> usize {
        self.heights[col] as usize
    }

    /// (col, row) に今置いた石が4連を完成させたか
    fn wins_from(&self, col: usize, row: usize) -> bool {
        let colour = self.cells[col][row].expect("wins_from on empty cell");
        const DIRS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
        for (dc, dr) in DIRS {
            let mut run = 1;
            for sign in [1i32, -1] {
                let mut c = col as i32 + dc * sign;
                let mut r = row as i32 + dr * sign;
                while (0..COLS as i32).contains(&c)
                    && (0..ROWS as i32).contains(&r)
                    && self.cells[c as usize][r as usize] == Some(colour)
                {
                    run += 1;
                    c += dc * sign;
                    r += dr * sign;
                }
            }
            if run >= 4 {
                return true;
            }
        }
        false
    }

    /// 指定陣営の4連ポテンシャル
    ///
    /// 相手石を含まない4マス窓を、含む自石数で重み付けして合計する。
    pub fn line_potential(&self, colour: Colour) -> i32 {
        const WEIGHTS: [i32; 4] = [0, 1, 8, 64];
        const DIRS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
        let mut total = 0;
        for col in 0..COLS as i32 {
            for row in 0..ROWS as i32 {
                for (dc, dr) in DIRS {
                    let end_c = col + dc * 3;
                    let end_r = row + dr * 3;
                    if !(0..COLS as i32).contains(&end_c) || !(0..ROWS as i32).contains(&end_r) {
                        continue;
                    }
                    let mut own = 0;
                    let mut blocked = false;
                    for i in 0..4 {
                        let cell =
                            self.cells[(col + dc * i) as usize][(row + dr * i) as usize];
                        match cell {
                            Some(c) if c == colour => own += 1,
                            Some(_) => {
                                blocked = true;
                                break;
                            }
                            None => {}
                        }
                    }
                    if !blocked {
                        total += WEIGHTS[own.min(3)];
                    }
                }
            }
        }
        total
    }
}

impl Default for DropBoard {
    fn default() -> Self {
        DropBoard::new()
    }
}

impl Board for DropBoard {
    fn initialise(&mut self) {
        *self = DropBoard::new();
    }

    fn play_move(&mut self, mv: Move) -> Result<CellList, SearchError> {
        let col = mv.raw() as usize;
        if self.over || col >= COLS || self.heights[col] as usize >= ROWS {
            return Err(SearchError::IllegalMove { mv, side: self.to_move });
        }
        let row = self.heights[col] as usize;
        self.cells[col][row] = Some(self.to_move);
        self.heights[col] += 1;
        self.moves_played += 1;
        self.last = mv;
        if self.wins_from(col, row) {
            self.over = true;
            self.winner = Some(self.to_move);
        } else if self.moves_played as usize == COLS * ROWS {
            self.over = true;
        }
        self.to_move = self.to_move.flip();
        Ok(smallvec![Cell::new((col * ROWS + row) as u16)])
    }

    fn legal_moves(&self, out: &mut MoveList) {
        out.clear();
        if self.over {
            return;
        }
        for col in 0..COLS {
            if (self.heights[col] as usize) < ROWS {
                out.push(Move::new(col as u32));
            }
        }
    }

    fn side_to_move(&self) -> Colour {
        self.to_move
    }

    fn pass(&mut self) {
        self.to_move = self.to_move.flip();
    }

    fn is_over(&self) -> bool {
        self.over
    }

    fn winner(&self) -> Option<Colour> {
        self.winner
    }

    fn move_count(&self) -> u32 {
        self.moves_played
    }

    fn last_move(&self) -> Option<Move> {
        if self.last.is_some() { Some(self.last) } else { None }
    }
}

/// 4連窓ベースの静的評価器
///
/// 終局は `win_in`/`loss_in` のply縮小スケール、それ以外は両陣営の
/// ラインポテンシャル差。構成上ゼロサム。
#[derive(Debug, Default, Clone, Copy)]
pub struct LineEvaluator;

impl Evaluator<DropBoard> for LineEvaluator {
    fn score(
        &self,
        _start: &DropBoard,
        board: &DropBoard,
        current_depth: Depth,
        _search_depth: Depth,
    ) -> Value {
        if board.is_over() {
            return match board.winner() {
                Some(w) if w == board.side_to_move() => Value::win_in(current_depth),
                Some(_) => Value::loss_in(current_depth),
                None => Value::DRAW,
            };
        }
        let stm = board.side_to_move();
        Value::new(board.line_potential(stm) - board.line_potential(stm.flip()))
    }
}

/// 中央列を優先する静的ランカー
#[derive(Debug, Default, Clone, Copy)]
pub struct CentreRanker;

impl MoveRanker<DropBoard> for CentreRanker {
    fn rank(&self, mv: Move, _board: &DropBoard, _depth: Depth) -> i32 {
        3 - (mv.raw() as i32 - 3).abs()
    }
}

/// 全列を登録した指し手カタログ
pub fn drop_catalog() -> MoveCatalog {
    let mut catalog = MoveCatalog::new();
    for col in 0..COLS {
        catalog.register(Move::new(col as u32));
    }
    catalog
}

/// 落としゲーム用のゲームコンテキスト
pub fn drop_context() -> Arc<GameContext<DropBoard>> {
    Arc::new(GameContext::new(DropBoard::new(), drop_catalog()))
}

/// 列番号の並びから局面を作る（Lightが先手）
pub fn board_from_cols(cols: &[u32]) -> DropBoard {
    let mut board = DropBoard::new();
    board.initialise();
    for &col in cols {
        board.play_move(Move::new(col)).expect("scripted move must be legal");
    }
    board
}

/// 定跡ブックテスト用の局面キー（FNV-1a）
pub fn board_key(board: &DropBoard) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for col in 0..COLS {
        for row in 0..ROWS {
            let byte = match board.cell(col, row) {
                None => 0u8,
                Some(Colour::Light) => 1,
                Some(Colour::Dark) => 2,
            };
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
    }
    hash
}
