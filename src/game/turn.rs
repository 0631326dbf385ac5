use chrono::{DateTime, Duration, Utc};
use teloxide::types::UserId;

use crate::game::content::PromptKind;
use crate::game::room::Participant;

/// What the active player still owes for the current turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnStage {
    AwaitingChoice,
    AwaitingAnswer { kind: PromptKind, prompt: String },
}

/// Position of the turn pointer inside a running room.
///
/// Only ever built from a non-empty participant list, so `active` always
/// matches `order[index]` for the list it was advanced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    index: usize,
    active: UserId,
    stage: TurnStage,
    started_at: DateTime<Utc>,
}

impl Turn {
    pub(crate) fn first(order: &[Participant], now: DateTime<Utc>) -> Option<Self> {
        let first = order.first()?;
        Some(Self {
            index: 0,
            active: first.user_id,
            stage: TurnStage::AwaitingChoice,
            started_at: now,
        })
    }

    /// Moves to the next participant, wrapping around, and returns them
    pub(crate) fn advance(&mut self, order: &[Participant], now: DateTime<Utc>) -> UserId {
        // Participants never leave a running room, so `order` is non-empty.
        self.index = (self.index + 1) % order.len();
        self.active = order[self.index].user_id;
        self.stage = TurnStage::AwaitingChoice;
        self.started_at = now;
        self.active
    }

    pub(crate) fn issue(&mut self, kind: PromptKind, prompt: String) {
        self.stage = TurnStage::AwaitingAnswer { kind, prompt };
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn active(&self) -> UserId {
        self.active
    }

    pub fn stage(&self) -> &TurnStage {
        &self.stage
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn is_idle(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        now.signed_duration_since(self.started_at) >= timeout
    }
}
