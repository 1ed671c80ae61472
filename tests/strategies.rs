// All strategies are fundamentally the minimax algorithm, so for any position
// they must agree on the score of the root and of the move they suggest. This
// file checks them against a plain recursive minimax over many positions of
// the bundled games, and checks the shape of the trees they build.

use minimax_tree::games::{Subtract, SubtractSquare, Tippy};
use minimax_tree::util::random_state;
use minimax_tree::*;
use rayon::prelude::*;
use std::collections::HashSet;

fn plain_minimax<S: GameState>(s: &S, initial: Player) -> Score {
    if s.is_over() {
        return if s.winner(initial) {
            WIN
        } else if s.winner(initial.opponent()) {
            LOSS
        } else {
            TIE
        };
    }
    let scores = s.possible_next_moves().into_iter().map(|m| {
        let next = s.apply_move(&m).unwrap();
        plain_minimax(&next, initial)
    });
    if s.next_player() == initial {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

fn distinct_positions<S: GameState + CanonicalKey>(s: &S, seen: &mut HashSet<S::Key>) {
    if s.is_over() || !seen.insert(s.canonical_key()) {
        return;
    }
    for m in s.possible_next_moves() {
        distinct_positions(&s.apply_move(&m).unwrap(), seen);
    }
}

// Every position reached after `plies` moves from the empty 3x3 grid that is
// not already over.
fn tippy_positions(plies: usize) -> Vec<Tippy> {
    let mut positions = vec![Tippy::new(Player::One, 3)];
    for _ in 0..plies {
        positions = positions
            .iter()
            .flat_map(|s| {
                s.possible_next_moves().into_iter().map(move |m| s.apply_move(&m).unwrap())
            })
            .filter(|s| !s.is_over())
            .collect();
    }
    positions
}

// Check a single position: every strategy reports the reference root score,
// and the move it suggests is worth exactly that much.
fn check_agreement<S>(s: &S)
where
    S: GameState + CanonicalKey + std::fmt::Display,
{
    let initial = s.next_player();
    let expected = plain_minimax(s, initial);

    let mut minimax = MinimaxSearch::new();
    let mut pruned = PrunedMinimaxSearch::new();
    let mut memoized = MemoizedMinimaxSearch::new();
    let moves = [
        minimax.suggest_move(s).unwrap(),
        pruned.suggest_move(s).unwrap(),
        memoized.suggest_move(s).unwrap(),
    ];
    assert_eq!(minimax.root_score(), Some(expected), "{}", s);
    assert_eq!(pruned.root_score(), Some(expected), "{}", s);
    assert_eq!(memoized.root_score(), Some(expected), "{}", s);
    for m in moves.iter() {
        assert!(s.possible_next_moves().contains(m));
        let next = s.apply_move(m).unwrap();
        assert_eq!(plain_minimax(&next, initial), expected, "move {:?}\n{}", m, s);
    }
    assert!(pruned.stats().visited <= minimax.stats().visited, "{}", s);
}

#[test]
fn test_strategies_agree_on_tippy() {
    let positions = tippy_positions(2);
    assert_eq!(positions.len(), 72);
    positions.par_iter().for_each(|s| check_agreement(s));
}

#[test]
fn test_strategies_agree_on_random_tippy() {
    let mut rng = rand::thread_rng();
    let positions: Vec<Tippy> =
        (0..40).map(|i| random_state(&Tippy::new(Player::Two, 3), 3 + i % 4, &mut rng)).collect();
    positions.par_iter().for_each(|s| check_agreement(s));
}

#[test]
fn test_strategies_agree_on_subtract_square() {
    (1..=25u32).into_par_iter().for_each(|n| {
        check_agreement(&SubtractSquare::new(Player::One, n));
        check_agreement(&SubtractSquare::new(Player::Two, n));
    });
}

// Replay the tree against the game: leaves are terminal with the right score,
// internal nodes hold every legal move in order and the min or max of their
// children.
fn check_full_tree<S: GameState>(s: &S, tree: &Tree<SearchNode<S::M>>, initial: Player) {
    if tree.is_leaf() {
        assert!(s.is_over());
        assert_eq!(tree.value().score, plain_minimax(s, initial));
        return;
    }
    let moves: Vec<S::M> =
        tree.children().iter().map(|c| c.value().mv.clone().unwrap()).collect();
    assert_eq!(moves, s.possible_next_moves());
    let scores = tree.children().iter().map(|c| c.value().score);
    let expected =
        if s.next_player() == initial { scores.max().unwrap() } else { scores.min().unwrap() };
    assert_eq!(tree.value().score, expected);
    for (m, child) in moves.iter().zip(tree.children()) {
        check_full_tree(&s.apply_move(m).unwrap(), child, initial);
    }
}

// The pruned tree is the exhaustive tree with some trailing siblings left out.
fn is_pruned_prefix<M: PartialEq>(
    pruned: &Tree<SearchNode<M>>, full: &Tree<SearchNode<M>>,
) -> bool {
    pruned.value() == full.value()
        && pruned.children().len() <= full.children().len()
        && pruned.children().iter().zip(full.children()).all(|(p, f)| is_pruned_prefix(p, f))
}

#[test]
fn test_tree_shapes() {
    for s in tippy_positions(3).iter().step_by(7) {
        let initial = s.next_player();
        let full = MinimaxSearch::new().generate_move_tree(s, initial, None).unwrap();
        assert_eq!(full.value().mv, None);
        check_full_tree(s, &full, initial);

        let pruned = PrunedMinimaxSearch::new().generate_move_tree(s, initial, None).unwrap();
        assert!(is_pruned_prefix(&pruned, &full), "{}", s);
        assert!(pruned.len() <= full.len());

        // Reused subtrees carry the move of the path they were reached by, so
        // the memoized tree is indistinguishable from the exhaustive one.
        let mut cache = MoveCache::new();
        let memoized =
            MemoizedMinimaxSearch::new().generate_move_tree(s, initial, &mut cache, None).unwrap();
        assert_eq!(memoized, full, "{}", s);
    }
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let s = Tippy::from_rows(Player::One, &["xxo", ".x.", "oo."]).unwrap();
    let mut minimax = MinimaxSearch::new();
    let mut pruned = PrunedMinimaxSearch::new();
    assert_eq!(minimax.suggest_move(&s), pruned.suggest_move(&s));
    assert!(pruned.stats().visited < minimax.stats().visited);
    assert!(pruned.stats().cutoffs > 0);
    assert_eq!(minimax.stats().cutoffs, 0);

    let s = SubtractSquare::new(Player::One, 20);
    minimax.suggest_move(&s).unwrap();
    pruned.suggest_move(&s).unwrap();
    assert!(pruned.stats().visited < minimax.stats().visited);
    let full = MinimaxSearch::new().generate_move_tree(&s, Player::One, None).unwrap();
    assert_eq!(minimax.stats().visited, full.len());
}

fn memoized_expansions<S>(s: &S, opts: MemoOptions) -> (usize, SearchStats)
where
    S: GameState + CanonicalKey,
{
    let mut seen = HashSet::new();
    distinct_positions(s, &mut seen);
    let mut memoized = MemoizedMinimaxSearch::with_options(opts);
    memoized.suggest_move(s).unwrap();
    (seen.len(), memoized.stats())
}

#[test]
fn test_memoization_expands_each_position_once() {
    let s = Tippy::new(Player::One, 3).apply_move(&games::Place::new(0, 0)).unwrap();
    let (distinct, stats) = memoized_expansions(&s, MemoOptions::new());
    assert_eq!(stats.expanded, distinct);
    assert!(stats.cache_hits > 0);

    let s = SubtractSquare::new(Player::Two, 40);
    let (distinct, stats) = memoized_expansions(&s, MemoOptions::new().with_cache_capacity(8));
    assert_eq!(stats.expanded, distinct);
    assert!(stats.cache_hits > 0);
}

#[test]
fn test_cache_lookups_are_stable() {
    let s = SubtractSquare::new(Player::One, 12);
    let mut cache = MoveCache::new();
    let tree = MemoizedMinimaxSearch::new()
        .generate_move_tree(&s, Player::One, &mut cache, None)
        .unwrap();
    let mut seen = HashSet::new();
    distinct_positions(&s, &mut seen);
    assert_eq!(cache.len(), seen.len());
    let key = (Player::Two, 8);
    let first = cache.get(&key).cloned().unwrap();
    assert_eq!(cache.get(&key), Some(&first));
    assert_eq!(first.value().mv, None);

    // 12 - 4 = 8 with the opponent to move.
    let via_four = tree.children().iter().find(|c| c.value().mv == Some(Subtract(4))).unwrap();
    assert_eq!(via_four.value().score, first.value().score);
    assert_eq!(via_four.children(), first.children());
}

#[test]
fn test_suggestions_are_idempotent() {
    for s in tippy_positions(4).iter().step_by(97) {
        for a in Algorithm::ALL {
            let mut strategy = a.build::<Tippy>();
            let m1 = strategy.suggest_move(s).unwrap();
            let m2 = strategy.suggest_move(s).unwrap();
            let initial = s.next_player();
            assert_eq!(
                plain_minimax(&s.apply_move(&m1).unwrap(), initial),
                plain_minimax(&s.apply_move(&m2).unwrap(), initial)
            );
        }
    }
}
