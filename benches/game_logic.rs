use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, GameState, Piece};
use blockfall::types::{GameAction, PieceKind, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            state.handle_key_down(black_box(GameAction::HardDrop));
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_valid_position(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::new(PieceKind::T);

    c.bench_function("is_valid_position", |b| {
        b.iter(|| board.is_valid_position(black_box(&piece)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop,
    bench_clear_four_rows,
    bench_valid_position
);
criterion_main!(benches);
