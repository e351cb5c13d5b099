//! Turn ownership validation against replicated server state.
//!
//! The client's view of whose turn it is lags the authoritative server
//! by one replication hop. Validation is therefore a stateless predicate
//! over the latest locally-held state, and a mismatch between the local
//! and server turn colors is first treated as transient lag, retried on
//! a fixed backoff, and only then surfaced as a terminal rejection.

use crate::games::ludo::{Color, GameStatus};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Locally replicated turn state, probed immediately before an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    /// Color the client believes it is acting as.
    pub current_color: Option<Color>,
    /// Turn color in the latest replicated server state.
    pub server_turn_color: Option<Color>,
    /// Whether the game is active at all.
    pub is_game_active: bool,
    /// Die value already rolled this turn, if any.
    pub dice_value: Option<u8>,
    /// Whether the server is waiting for a move to complete the turn.
    pub waiting_for_move: bool,
}

impl TurnContext {
    /// Creates a context from the replicated pieces the client holds.
    pub fn new(
        current_color: Option<Color>,
        server_turn_color: Option<Color>,
        status: GameStatus,
    ) -> Self {
        Self {
            current_color,
            server_turn_color,
            is_game_active: status.is_active(),
            dice_value: None,
            waiting_for_move: false,
        }
    }

    /// Attaches the die value already rolled this turn.
    pub fn with_dice(mut self, dice: u8) -> Self {
        self.dice_value = Some(dice);
        self
    }

    /// Marks the turn as waiting for a move submission.
    pub fn awaiting_move(mut self) -> Self {
        self.waiting_for_move = true;
        self
    }
}

/// Verdict of a turn validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnVerdict {
    /// Whether the action may be submitted.
    pub is_valid: bool,
    /// Why the action was rejected, if it was.
    pub reason: Option<TurnRejection>,
    /// Whether the rejection could resolve once replication catches up.
    pub can_retry: bool,
}

impl TurnVerdict {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
            can_retry: false,
        }
    }

    fn rejected(reason: TurnRejection, can_retry: bool) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason),
            can_retry,
        }
    }
}

/// Why a turn validation rejected the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum TurnRejection {
    /// The game is not active.
    #[display("game is not active")]
    GameInactive,

    /// Neither side knows whose turn it is.
    #[display("turn state is missing on both sides")]
    MissingTurnState,

    /// Exactly one side knows whose turn it is; the state is malformed.
    #[display("turn state is incomplete")]
    IncompleteTurnState,

    /// Both sides are well-formed but disagree; replication lag until
    /// proven otherwise.
    #[display("local turn {} has not caught up to server turn {}", local, server)]
    TurnMismatch {
        /// Color the client believes is acting.
        local: Color,
        /// Color the server says is acting.
        server: Color,
    },
}

/// Validates a client action against the latest replicated turn state.
#[instrument(fields(
    current = ?ctx.current_color,
    server = ?ctx.server_turn_color,
    active = ctx.is_game_active,
    dice = ?ctx.dice_value,
    waiting = ctx.waiting_for_move,
), skip(ctx))]
pub fn validate_turn(ctx: &TurnContext) -> TurnVerdict {
    if !ctx.is_game_active {
        return TurnVerdict::rejected(TurnRejection::GameInactive, false);
    }
    match (ctx.current_color, ctx.server_turn_color) {
        (None, None) => TurnVerdict::rejected(TurnRejection::MissingTurnState, false),
        (Some(local), Some(server)) if local == server => {
            debug!(%local, "turn confirmed");
            TurnVerdict::valid()
        }
        (Some(local), Some(server)) => {
            debug!(%local, %server, "turn mismatch, possibly replication lag");
            TurnVerdict::rejected(TurnRejection::TurnMismatch { local, server }, true)
        }
        _ => TurnVerdict::rejected(TurnRejection::IncompleteTurnState, false),
    }
}

/// Retry policy for absorbing replication lag.
#[derive(Debug, Clone, Copy, Getters)]
pub struct RetryPolicy {
    /// Number of re-validations after the initial attempt.
    attempts: u32,
    /// Fixed delay between attempts.
    backoff: Duration,
}

impl RetryPolicy {
    /// Creates a policy with the given retry count and backoff.
    pub fn new(attempts: u32, backoff: Duration) -> Self {
        Self { attempts, backoff }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 2,
            backoff: Duration::from_millis(500),
        }
    }
}

/// Validates with retries, probing fresh turn state before each attempt.
///
/// Only retryable rejections are retried. Once the attempts are spent
/// the final verdict is downgraded to non-retryable so the caller
/// surfaces it as a terminal failure instead of looping.
#[instrument(skip(probe, policy))]
pub async fn validate_turn_with_retry<F>(mut probe: F, policy: RetryPolicy) -> TurnVerdict
where
    F: FnMut() -> TurnContext,
{
    let mut verdict = validate_turn(&probe());
    let mut attempt = 0;
    while !verdict.is_valid && verdict.can_retry && attempt < policy.attempts {
        attempt += 1;
        debug!(attempt, backoff_ms = policy.backoff.as_millis() as u64, "retrying turn validation");
        tokio::time::sleep(policy.backoff).await;
        verdict = validate_turn(&probe());
    }
    if !verdict.is_valid && verdict.can_retry {
        warn!(attempts = policy.attempts, reason = ?verdict.reason, "turn validation exhausted retries");
        verdict.can_retry = false;
    }
    verdict
}
