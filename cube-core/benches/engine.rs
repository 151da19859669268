use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cube_core::ai::{select_move, Difficulty};
use cube_core::board::{Board, Coord, Player};
use cube_core::controller::Session;
use cube_core::detector::scan;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn half_full_board() -> Board {
    let mut board = Board::new();
    let mut player = Player::X;
    for coord in Coord::all().step_by(2) {
        board.set(coord, player).expect("cell is empty");
        player = player.opponent();
    }
    board
}

fn bench_scan(c: &mut Criterion) {
    let board = half_full_board();
    c.bench_function("scan_half_full", |b| b.iter(|| scan(black_box(&board))));
}

fn bench_select_move(c: &mut Criterion) {
    let board = half_full_board();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    c.bench_function("select_move_hard", |b| {
        b.iter(|| select_move(black_box(&board), Difficulty::Hard, Player::O, &mut rng))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game", |b| {
        b.iter(|| {
            let mut session = Session::new();
            for coord in Coord::all() {
                let _ = session.apply_move(coord);
            }
            session.outcome()
        })
    });
}

criterion_group!(benches, bench_scan, bench_select_move, bench_full_game);
criterion_main!(benches);
