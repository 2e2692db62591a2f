//! Outcome derivation from cyclic move positions.

use super::moveset::MoveSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one ordered pair of moves, from the first move's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Lose,
}

impl Outcome {
    /// Display string, exactly as printed to the player
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win!",
            Outcome::Draw => "Draw!",
            Outcome::Lose => "Lose!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Precomputed win/draw/lose relation for every ordered pair of ordinals.
///
/// Moves sit on a cycle in configuration order: each move beats the N/2
/// moves that follow it and loses to the N/2 that precede it (N odd, so the
/// split is exact). The full N x N relation is derived once from the
/// [`MoveSet`] and never changes; supplying the moves in a different order
/// changes who beats whom.
#[derive(Clone, Debug)]
pub struct OutcomeTable {
    n: usize,
    cells: Vec<Outcome>,
}

impl OutcomeTable {
    /// Build the full table for the given move set
    pub fn new(moves: &MoveSet) -> Self {
        let n = moves.len();
        let mut cells = Vec::with_capacity(n * n);
        for a in 0..n {
            for b in 0..n {
                let distance = (n + b - a) % n;
                let outcome = if distance == 0 {
                    Outcome::Draw
                } else if distance <= n / 2 {
                    Outcome::Win
                } else {
                    Outcome::Lose
                };
                cells.push(outcome);
            }
        }
        Self { n, cells }
    }

    /// Number of moves the table covers
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false; the table covers at least 3 moves
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Outcome for 1-based ordinals `(a, b)`, from `a`'s perspective.
    ///
    /// # Panics
    ///
    /// Panics if either ordinal is outside `1..=len()`.
    pub fn outcome(&self, a: usize, b: usize) -> Outcome {
        assert!(
            (1..=self.n).contains(&a) && (1..=self.n).contains(&b),
            "ordinal out of range 1..={}",
            self.n
        );
        self.cells[(a - 1) * self.n + (b - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize) -> OutcomeTable {
        let names: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
        OutcomeTable::new(&MoveSet::new(names).unwrap())
    }

    #[test]
    fn test_three_moves_beat_their_successor() {
        let t = table(3);

        // each move beats the one after it on the cycle
        assert_eq!(t.outcome(1, 2), Outcome::Win);
        assert_eq!(t.outcome(2, 3), Outcome::Win);
        assert_eq!(t.outcome(3, 1), Outcome::Win);

        assert_eq!(t.outcome(2, 1), Outcome::Lose);
        assert_eq!(t.outcome(3, 2), Outcome::Lose);
        assert_eq!(t.outcome(1, 3), Outcome::Lose);
    }

    #[test]
    fn test_same_move_draws() {
        let t = table(5);
        for a in 1..=5 {
            assert_eq!(t.outcome(a, a), Outcome::Draw);
        }
    }

    #[test]
    fn test_five_moves_beat_the_next_two() {
        let t = table(5);

        assert_eq!(t.outcome(1, 2), Outcome::Win);
        assert_eq!(t.outcome(1, 3), Outcome::Win);
        assert_eq!(t.outcome(1, 4), Outcome::Lose);
        assert_eq!(t.outcome(1, 5), Outcome::Lose);

        // wrap-around: move 4 beats 5 and 1
        assert_eq!(t.outcome(4, 5), Outcome::Win);
        assert_eq!(t.outcome(4, 1), Outcome::Win);
        assert_eq!(t.outcome(4, 2), Outcome::Lose);
    }

    #[test]
    fn test_table_depends_on_supplied_order() {
        let forward = OutcomeTable::new(&MoveSet::new(["a", "b", "c"]).unwrap());
        let ms = MoveSet::new(["c", "b", "a"]).unwrap();
        let reversed = OutcomeTable::new(&ms);

        // "a" vs "b": ordinals (1, 2) forward, (3, 2) reversed
        assert_eq!(forward.outcome(1, 2), Outcome::Win);
        assert_eq!(reversed.outcome(3, 2), Outcome::Lose);
        assert_eq!(ms.ordinal("a"), Some(3));
    }

    #[test]
    #[should_panic(expected = "ordinal out of range")]
    fn test_out_of_range_ordinal_panics() {
        table(3).outcome(0, 1);
    }
}
