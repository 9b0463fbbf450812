//! Benchmarks for rule evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Move, Position, PositionBuilder, Side, Square};
use chess_rules::Game;

fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    position
        .legal_moves()
        .into_iter()
        .filter_map(|mv| position.apply(mv).ok())
        .map(|next| perft(&next, depth - 1))
        .sum()
}

fn line(moves: &[&str]) -> Position {
    moves.iter().fold(Position::new(), |position, text| {
        let mv: Move = text.parse().unwrap();
        position.apply(mv).unwrap()
    })
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&startpos, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Position::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let middlegame = line(&["e2-e4", "e7-e5", "g1-f3", "b8-c6", "f1-c4", "g8-f6"]);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    group.finish();
}

fn bench_attacks(c: &mut Criterion) {
    let middlegame = line(&["e2-e4", "e7-e5", "g1-f3", "b8-c6", "f1-c4", "g8-f6"]);
    let squares: Vec<Square> = ["e5", "f7", "d4", "h8"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    c.bench_function("is_square_attacked", |b| {
        b.iter(|| {
            squares
                .iter()
                .filter(|&&sq| middlegame.is_square_attacked(black_box(sq), Side::White))
                .count()
        })
    });

    let open = PositionBuilder::starting_position()
        .clear("f1".parse().unwrap())
        .clear("g1".parse().unwrap())
        .build();
    c.bench_function("castling_destinations", |b| {
        b.iter(|| black_box(open.legal_destinations("e1".parse().unwrap())))
    });
}

fn bench_game(c: &mut Criterion) {
    let shuffle: Vec<Move> = ["g1-f3", "g8-f6", "f3-g1", "f6-g8"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    c.bench_function("threefold_game", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for &mv in shuffle.iter().cycle().take(8) {
                game.play(mv, &mut chess_rules::PieceKind::Queen).unwrap();
            }
            black_box(game.outcome())
        })
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_attacks, bench_game);
criterion_main!(benches);
