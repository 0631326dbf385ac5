use chrono::{DateTime, Utc};
use teloxide::types::{ChatId, UserId};

use crate::game::content::{ContentBank, PromptKind};
use crate::game::error::GameError;
use crate::game::turn::{Turn, TurnStage};

/// Coarse state of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Open,
    Running,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user_id: UserId,
    pub display_name: String,
}

impl Participant {
    pub fn new(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    AlreadyJoined,
}

/// One truth-or-dare game hosted in a chat.
///
/// Join order is turn order. The room is `Running` exactly when it holds a
/// [`Turn`]; every mutating method validates first and only then writes, so a
/// rejection never leaves partial changes behind.
#[derive(Debug, Clone)]
pub struct Room {
    chat_id: ChatId,
    starter: UserId,
    participants: Vec<Participant>,
    turn: Option<Turn>,
    created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(chat_id: ChatId, starter: UserId, now: DateTime<Utc>) -> Self {
        Self {
            chat_id,
            starter,
            participants: Vec::new(),
            turn: None,
            created_at: now,
        }
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn starter(&self) -> UserId {
        self.starter
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn phase(&self) -> Phase {
        if self.turn.is_some() {
            Phase::Running
        } else {
            Phase::Open
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn turn(&self) -> Option<&Turn> {
        self.turn.as_ref()
    }

    pub fn active_user(&self) -> Option<UserId> {
        self.turn.as_ref().map(Turn::active)
    }

    pub fn active_participant(&self) -> Option<&Participant> {
        let turn = self.turn.as_ref()?;
        self.participants.get(turn.index())
    }

    pub fn display_name(&self, user_id: UserId) -> String {
        self.participants
            .iter()
            .find(|p| p.user_id == user_id)
            .map(|p| p.display_name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("user {}", user_id.0))
    }

    pub fn join(&mut self, participant: Participant) -> Result<JoinOutcome, GameError> {
        if self.phase() == Phase::Running {
            return Err(GameError::RegistrationClosed);
        }
        if self.participants.iter().any(|p| p.user_id == participant.user_id) {
            return Ok(JoinOutcome::AlreadyJoined);
        }
        self.participants.push(participant);
        Ok(JoinOutcome::Joined)
    }

    /// Moves the room to `Running` and returns the first active player
    pub fn close_registration(
        &mut self,
        caller: UserId,
        now: DateTime<Utc>,
    ) -> Result<UserId, GameError> {
        if caller != self.starter {
            return Err(GameError::NotStarter);
        }
        if self.phase() == Phase::Running {
            return Err(GameError::AlreadyRunning);
        }
        let turn = Turn::first(&self.participants, now).ok_or(GameError::NoParticipants)?;
        let first = turn.active();
        self.turn = Some(turn);
        Ok(first)
    }

    /// Draws a prompt of `kind` for the active player and locks it for the turn
    pub fn choose_prompt(
        &mut self,
        caller: UserId,
        kind: PromptKind,
        bank: &ContentBank,
    ) -> Result<String, GameError> {
        let turn = turn_of(&mut self.turn, caller)?;
        if turn.stage() != &TurnStage::AwaitingChoice {
            return Err(GameError::PromptAlreadyIssued);
        }
        let prompt = bank
            .pick(kind)
            .ok_or(GameError::EmptyBank(kind))?
            .to_string();
        turn.issue(kind, prompt.clone());
        Ok(prompt)
    }

    /// Ends the caller's turn and returns the next active player
    pub fn confirm_answered(
        &mut self,
        caller: UserId,
        now: DateTime<Utc>,
    ) -> Result<UserId, GameError> {
        let turn = turn_of(&mut self.turn, caller)?;
        Ok(turn.advance(&self.participants, now))
    }

    /// Skips the current turn regardless of who holds it.
    ///
    /// Returns `(skipped, next)`, or `None` while registration is open.
    pub fn skip_turn(&mut self, now: DateTime<Utc>) -> Option<(UserId, UserId)> {
        let turn = self.turn.as_mut()?;
        let skipped = turn.active();
        Some((skipped, turn.advance(&self.participants, now)))
    }
}

fn turn_of(turn: &mut Option<Turn>, caller: UserId) -> Result<&mut Turn, GameError> {
    match turn.as_mut() {
        Some(turn) if turn.active() == caller => Ok(turn),
        _ => Err(GameError::NotYourTurn),
    }
}
