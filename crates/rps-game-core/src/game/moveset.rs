//! Validated, ordered move list.

use crate::error::GameError;
use std::collections::HashMap;

/// Ordered collection of distinct move names.
///
/// Ordinals are 1-based positions in the order the names were supplied; that
/// order defines the cyclic dominance the outcome table is derived from.
/// Immutable after construction.
#[derive(Clone, Debug)]
pub struct MoveSet {
    names: Vec<String>,
    ordinals: HashMap<String, usize>,
}

impl MoveSet {
    /// Validate and index a move list.
    ///
    /// Requires an odd count of at least 3 with pairwise-distinct names
    /// (case-sensitive exact match).
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() < 3 {
            return Err(GameError::InvalidConfiguration(format!(
                "need at least 3 moves, got {}",
                names.len()
            )));
        }
        if names.len() % 2 == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "move count must be odd, got {}",
                names.len()
            )));
        }

        let mut ordinals = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if ordinals.insert(name.clone(), i + 1).is_some() {
                return Err(GameError::InvalidConfiguration(format!(
                    "duplicate move name: {name}"
                )));
            }
        }

        Ok(Self { names, ordinals })
    }

    /// Number of moves; always odd and at least 3
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; a valid set has at least 3 moves
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Move name at a 1-based ordinal
    pub fn name(&self, ordinal: usize) -> Option<&str> {
        ordinal
            .checked_sub(1)
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }

    /// 1-based ordinal of a move name (case-sensitive)
    pub fn ordinal(&self, name: &str) -> Option<usize> {
        self.ordinals.get(name).copied()
    }

    /// Names in supplied order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn test_rejects_too_few_moves() {
        for count in 0..3 {
            let names: Vec<String> = (0..count).map(|i| format!("m{i}")).collect();
            let err = MoveSet::new(names).unwrap_err();
            assert!(matches!(err, GameError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn test_rejects_even_count() {
        let err = MoveSet::new(["a", "b", "c", "d"]).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = MoveSet::new(["rock", "paper", "rock"]).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(m) if m.contains("rock")));
    }

    #[test]
    fn test_accepts_three_distinct_moves() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_names_differing_only_in_case_are_distinct() {
        let moves = MoveSet::new(["Rock", "rock", "ROCK"]).unwrap();
        assert_eq!(moves.ordinal("rock"), Some(2));
    }

    #[test]
    fn test_lookup_both_ways() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();

        assert_eq!(moves.name(1), Some("rock"));
        assert_eq!(moves.name(3), Some("scissors"));
        assert_eq!(moves.name(0), None);
        assert_eq!(moves.name(4), None);

        assert_eq!(moves.ordinal("paper"), Some(2));
        assert_eq!(moves.ordinal("lizard"), None);
    }

    #[test]
    fn test_names_iterate_in_supplied_order() {
        let moves = MoveSet::new(["c", "a", "b"]).unwrap();
        let names: Vec<&str> = moves.names().collect();
        assert_eq!(names, ["c", "a", "b"]);
    }
}
