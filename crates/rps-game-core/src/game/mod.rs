//! Move set, outcome derivation, and session state machine.

mod moveset;
mod outcome;
mod session;

pub use moveset::MoveSet;
pub use outcome::{Outcome, OutcomeTable};
pub use session::{GameSession, PlayerInput, RoundResult, SessionId, SessionState};
