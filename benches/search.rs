#[macro_use]
extern crate bencher;

use bencher::Bencher;
use minimax_tree::games::{Place, SubtractSquare, Tippy};
use minimax_tree::*;

fn opening() -> Tippy {
    Tippy::new(Player::One, 3).apply_move(&Place::new(0, 0)).unwrap()
}

fn bench_minimax(b: &mut Bencher) {
    let board = opening();
    b.iter(|| {
        let mut s = MinimaxSearch::new();
        assert!(s.suggest_move(&board).is_ok());
    });
}

fn bench_pruned(b: &mut Bencher) {
    let board = opening();
    b.iter(|| {
        let mut s = PrunedMinimaxSearch::new();
        assert!(s.suggest_move(&board).is_ok());
    });
}

fn bench_memoized(b: &mut Bencher) {
    let board = opening();
    b.iter(|| {
        let mut s = MemoizedMinimaxSearch::new();
        assert!(s.suggest_move(&board).is_ok());
    });
}

fn bench_memoized_subtract_square(b: &mut Bencher) {
    let pile = SubtractSquare::new(Player::One, 200);
    b.iter(|| {
        let opts = MemoOptions::new().with_cache_capacity(512);
        let mut s = MemoizedMinimaxSearch::with_options(opts);
        assert!(s.suggest_move(&pile).is_ok());
    });
}

benchmark_group!(
    benches,
    bench_minimax,
    bench_pruned,
    bench_memoized,
    bench_memoized_subtract_square
);
benchmark_main!(benches);
