//! Number-guessing game as a plain value: the caller owns the session and
//! threads it through [`apply_guess`].

use rand::Rng;

pub const MIN_TARGET: u32 = 1;
/// Inclusive.
pub const MAX_TARGET: u32 = 99;
pub const MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    target: u32,
    attempts: u32,
    max_attempts: u32,
    state: GameState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    TooLow,
    TooHigh,
    /// The session had already ended; nothing changed.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub verdict: Verdict,
    pub attempts: u32,
    pub remaining: u32,
    pub game_over: bool,
}

impl GameSession {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_target(rng.gen_range(MIN_TARGET..=MAX_TARGET))
    }

    pub fn with_target(target: u32) -> Self {
        Self {
            target,
            attempts: 0,
            max_attempts: MAX_ATTEMPTS,
            state: GameState::InProgress,
        }
    }

    /// A fresh game with a new target.
    pub fn reset<R: Rng>(self, rng: &mut R) -> Self {
        Self::new(rng)
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::InProgress
    }
}

pub fn apply_guess(session: GameSession, guess: u32) -> (GameSession, GuessOutcome) {
    if session.is_over() {
        let outcome = GuessOutcome {
            verdict: Verdict::GameOver,
            attempts: session.attempts,
            remaining: session.remaining(),
            game_over: true,
        };
        return (session, outcome);
    }

    let attempts = session.attempts + 1;
    let verdict = match guess.cmp(&session.target) {
        std::cmp::Ordering::Equal => Verdict::Correct,
        std::cmp::Ordering::Less => Verdict::TooLow,
        std::cmp::Ordering::Greater => Verdict::TooHigh,
    };

    let state = if verdict == Verdict::Correct {
        GameState::Won
    } else if attempts >= session.max_attempts {
        GameState::Lost
    } else {
        GameState::InProgress
    };

    let next = GameSession {
        attempts,
        state,
        ..session
    };
    let outcome = GuessOutcome {
        verdict,
        attempts,
        remaining: next.remaining(),
        game_over: next.is_over(),
    };
    (next, outcome)
}
