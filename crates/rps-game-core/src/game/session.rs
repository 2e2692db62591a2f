//! Single-round game session state machine.

use super::moveset::MoveSet;
use super::outcome::{Outcome, OutcomeTable};
use crate::crypto::{CommitKey, MoveCommitment, Reveal, SecureRandom};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique session identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the session is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Commitment shown, waiting for the human's move
    AwaitingMove,
    /// Round played and reveal disclosed
    Resolved,
    /// Human left without playing; nothing was disclosed
    Exited,
}

/// One parsed prompt response
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerInput {
    /// `0`: leave without playing
    Exit,
    /// `?`: show the outcome table, does not consume the turn
    Help,
    /// A 1-based move ordinal
    Move(usize),
}

/// Completed round, reported from the human's perspective
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundResult {
    /// Human's move ordinal
    pub human: usize,
    /// Computer's move ordinal
    pub computer: usize,
    /// Outcome for the human
    pub outcome: Outcome,
    /// Disclosed selector and key for commitment verification
    pub reveal: Reveal,
}

/// One round of the game against a committed computer opponent.
///
/// The computer's move is fixed at construction: the commitment MAC is
/// available immediately, while the key and selector leave the session only
/// inside the [`RoundResult`] returned by [`GameSession::play`]. Neither is
/// ever regenerated mid-round.
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    moves: MoveSet,
    table: OutcomeTable,
    key: CommitKey,
    selector: u8,
    commitment: MoveCommitment,
    state: SessionState,
}

impl GameSession {
    /// Build a session: derive the outcome table and fix the computer's move.
    ///
    /// Draws the commitment key first, then the selector byte, from `rng`.
    /// Fails only if the entropy source does.
    pub fn new(moves: MoveSet, rng: &mut dyn SecureRandom) -> Result<Self, GameError> {
        let table = OutcomeTable::new(&moves);
        let key = CommitKey::generate(rng)?;
        let mut selector = [0u8; 1];
        rng.fill_bytes(&mut selector)?;
        let selector = selector[0];
        let commitment = MoveCommitment::new(selector, &key);

        Ok(Self {
            id: SessionId::new(),
            moves,
            table,
            key,
            selector,
            commitment,
            state: SessionState::AwaitingMove,
        })
    }

    /// Session identifier
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The configured moves
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The precomputed outcome relation
    pub fn outcome_table(&self) -> &OutcomeTable {
        &self.table
    }

    /// MAC shown to the human before any move is made
    pub fn commitment(&self) -> &MoveCommitment {
        &self.commitment
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Computer's 1-based ordinal, derived from the committed selector
    fn computer_ordinal(&self) -> usize {
        self.selector as usize % self.moves.len() + 1
    }

    /// Classify one line of prompt input. Never changes session state.
    pub fn parse_input(&self, line: &str) -> Result<PlayerInput, GameError> {
        let line = line.trim();
        if line == "?" {
            return Ok(PlayerInput::Help);
        }
        match line.parse::<usize>() {
            Ok(0) => Ok(PlayerInput::Exit),
            Ok(i) if i <= self.moves.len() => Ok(PlayerInput::Move(i)),
            _ => Err(GameError::InvalidInput(format!(
                "Please enter a valid move (1-{}) or '0' to exit.",
                self.moves.len()
            ))),
        }
    }

    /// Resolve the round against the human's ordinal and disclose the reveal.
    ///
    /// The outcome is looked up from the human's perspective. Transitions to
    /// [`SessionState::Resolved`]; a session plays at most one round.
    pub fn play(&mut self, human: usize) -> Result<RoundResult, GameError> {
        if self.state != SessionState::AwaitingMove {
            return Err(GameError::NotAwaitingMove(self.state));
        }
        if human < 1 || human > self.moves.len() {
            return Err(GameError::InvalidInput(format!(
                "Please enter a valid move (1-{}) or '0' to exit.",
                self.moves.len()
            )));
        }

        let computer = self.computer_ordinal();
        let outcome = self.table.outcome(human, computer);
        self.state = SessionState::Resolved;

        Ok(RoundResult {
            human,
            computer,
            outcome,
            reveal: Reveal {
                selector: self.selector,
                key: self.key.clone(),
            },
        })
    }

    /// Leave the session without disclosing anything about the computer's move
    pub fn exit(&mut self) -> Result<(), GameError> {
        if self.state != SessionState::AwaitingMove {
            return Err(GameError::NotAwaitingMove(self.state));
        }
        self.state = SessionState::Exited;
        Ok(())
    }
}
