//! Two computer players play Tippy against each other.
//!
//! Usage: `cargo run --example tippy -- [SIZE] [ALGORITHM] [ALGORITHM]`, where
//! each algorithm is one of `minimax`, `prune` or `memoize` (or `m`, `mp`,
//! `mm`). Sizes above 3 take a very long time to solve.

use minimax_tree::games::Tippy;
use minimax_tree::{Algorithm, GameState, Player, Strategy};
use std::process::exit;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let size = match args.first().map(|a| a.parse::<usize>()) {
        None => 3,
        Some(Ok(n)) if n >= 2 => n,
        Some(_) => {
            eprintln!("Size must be a number of at least 2");
            exit(2);
        }
    };
    let mut algorithms = [Algorithm::Memoized, Algorithm::Pruned];
    for (slot, arg) in algorithms.iter_mut().zip(args.iter().skip(1)) {
        match arg.parse() {
            Ok(a) => *slot = a,
            Err(e) => {
                eprintln!("{}", e);
                exit(2);
            }
        }
    }

    let mut strategies = [algorithms[0].build::<Tippy>(), algorithms[1].build::<Tippy>()];
    let mut state = Tippy::new(Player::One, size);
    println!("{} ({}) against {} ({})", Player::One, algorithms[0], Player::Two, algorithms[1]);
    while !state.is_over() {
        println!("{}\n", state);
        let s = match state.next_player() {
            Player::One => 0,
            Player::Two => 1,
        };
        let m = match strategies[s].suggest_move(&state) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("{}", e);
                exit(1);
            }
        };
        println!("{} plays {}", state.next_player(), m);
        state = match state.apply_move(&m) {
            Some(next) => next,
            None => {
                eprintln!("Rejected move {}", m);
                exit(1);
            }
        };
    }
    println!("{}\n", state);
    match [Player::One, Player::Two].iter().find(|&&p| state.winner(p)) {
        Some(p) => println!("{} wins", p),
        None => println!("Tie"),
    }
}
