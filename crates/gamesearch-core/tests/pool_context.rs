//! 盤面プールとゲームコンテキスト
//!
//! - checkout → initialise → checkin を経ても、プールは新品と
//!   `==` で同一のインスタンスを供給し続ける。
//! - recycle はキャッシュ済み派生状態（勝者・履歴）を必ずクリアする。

mod common;

use common::{board_from_cols, drop_context, DropBoard};
use gamesearch_core::{Board, Move};

#[test]
fn fresh_boards_are_equal_regardless_of_pool_identity() {
    let context = drop_context();

    let mut lent = context.lend();
    lent.initialise();

    let mut fresh = DropBoard::new();
    fresh.initialise();
    assert_eq!(lent, fresh);

    context.reclaim(lent);
}

#[test]
fn recycling_clears_cached_winner_and_history() {
    let context = drop_context();

    // 貸し出した盤面で勝敗のつくゲームを1局指す
    let mut board = context.lend();
    board.initialise();
    for &col in &[3u32, 0, 3, 0, 3, 0, 3] {
        board.play_move(Move::new(col)).unwrap();
    }
    assert!(board.is_over());
    assert!(board.winner().is_some());
    assert!(board.last_move().is_some());

    context.reclaim(board);

    // 同じインスタンスが再利用されても前のゲームは漏れない
    let reused = context.lend();
    assert_eq!(reused.winner(), None);
    assert!(!reused.is_over());
    assert_eq!(reused.move_count(), 0);
    assert_eq!(reused.last_move(), None);

    let mut reinitialised = reused;
    reinitialised.initialise();
    let mut fresh = DropBoard::new();
    fresh.initialise();
    assert_eq!(reinitialised, fresh);
    context.reclaim(reinitialised);
}

#[test]
fn copy_from_reproduces_every_observable_field() {
    let context = drop_context();
    let source = board_from_cols(&[3, 2, 3, 4]);

    let mut copy = context.lend();
    copy.copy_from(&source);
    assert_eq!(copy, source);
    assert_eq!(copy.side_to_move(), source.side_to_move());
    assert_eq!(copy.move_count(), source.move_count());
    assert_eq!(copy.last_move(), source.last_move());

    // コピーは独立している
    copy.play_move(Move::new(0)).unwrap();
    assert_ne!(copy, source);
    context.reclaim(copy);
}

#[test]
fn context_counts_outstanding_boards() {
    let context = drop_context();
    let a = context.lend();
    let b = context.lend();
    assert_eq!(context.pool_stats(), (2, 2));

    context.reclaim_all([a, b]);
    let (created, outstanding) = context.pool_stats();
    assert_eq!(created, 2);
    assert_eq!(outstanding, 0);

    // 再貸し出しでは新規生成されない
    let c = context.lend();
    assert_eq!(context.pool_stats().0, 2);
    context.reclaim(c);
}

#[test]
fn catalog_interns_canonical_moves() {
    let context = drop_context();
    let catalog = context.catalog();
    assert_eq!(catalog.len(), 7);

    let idx = catalog.index_of(Move::new(3)).unwrap();
    assert_eq!(catalog.get(idx), Some(Move::new(3)));
    assert_eq!(catalog.index_of(Move::new(3)).unwrap(), idx);
    assert_eq!(catalog.index_of(Move::new(99)), None);
}
