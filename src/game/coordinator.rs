use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use teloxide::types::{ChatId, UserId};
use tracing::{debug, info};

use crate::game::content::{ContentBank, PromptKind};
use crate::game::error::GameError;
use crate::game::intent::{GameAction, Notice, Outbound};
use crate::game::registry::RoomRegistry;
use crate::game::room::{JoinOutcome, Participant, Room};

/// Answers whether a user holds the elevated operator capability
pub trait OperatorDirectory: Send + Sync {
    fn is_operator(&self, user_id: UserId) -> bool;
}

/// Fixed set of operator ids, usually taken from configuration
#[derive(Debug, Clone, Default)]
pub struct OperatorList {
    ids: HashSet<UserId>,
}

impl OperatorList {
    pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ids: ids.into_iter().map(UserId).collect(),
        }
    }
}

impl OperatorDirectory for OperatorList {
    fn is_operator(&self, user_id: UserId) -> bool {
        self.ids.contains(&user_id)
    }
}

/// Result of an operation: the messages it wants sent, or why it was rejected
pub type GameResult = Result<Vec<Outbound>, GameError>;

/// Entry point for every truth-or-dare operation.
///
/// Holds the room registry plus the shared content bank. All methods are
/// synchronous and safe to call from concurrent tasks.
pub struct TruthOrDare {
    rooms: RoomRegistry,
    content: Arc<ContentBank>,
    operators: Arc<dyn OperatorDirectory>,
}

impl TruthOrDare {
    pub fn new(content: Arc<ContentBank>, operators: Arc<dyn OperatorDirectory>) -> Self {
        Self {
            rooms: RoomRegistry::new(),
            content,
            operators,
        }
    }

    pub fn content(&self) -> &ContentBank {
        &self.content
    }

    pub fn active_games(&self) -> usize {
        self.rooms.len()
    }

    /// Snapshot of the chat's room, if any
    pub fn room(&self, chat_id: ChatId) -> Option<Room> {
        self.rooms.get(chat_id)
    }

    pub fn is_operator(&self, user_id: UserId) -> bool {
        self.operators.is_operator(user_id)
    }

    /// Opens a room in the chat; the starter is not enrolled automatically
    pub fn start(&self, chat_id: ChatId, starter: UserId) -> GameResult {
        self.rooms.create(chat_id, starter, Utc::now())?;
        info!("Game room opened in chat {} by {}", chat_id.0, starter.0);

        Ok(vec![Outbound::to_chat(chat_id, Notice::RoomOpened)
            .with_actions([GameAction::Join, GameAction::CloseRegistration])])
    }

    pub fn join(
        &self,
        chat_id: ChatId,
        user_id: UserId,
        display_name: &str,
    ) -> Result<(JoinOutcome, Vec<Outbound>), GameError> {
        self.rooms.with_room(chat_id, |room| {
            let outcome = room.join(Participant::new(user_id, display_name))?;
            if outcome == JoinOutcome::AlreadyJoined {
                return Ok((outcome, Vec::new()));
            }
            debug!(
                "{} joined the room in chat {} ({} players)",
                user_id.0,
                chat_id.0,
                room.participants().len()
            );
            let roster = Notice::Roster {
                participants: room.participants().to_vec(),
            };
            let intent = Outbound::to_chat(chat_id, roster)
                .with_actions([GameAction::Join, GameAction::CloseRegistration])
                .replacing_source();
            Ok((outcome, vec![intent]))
        })
    }

    pub fn close_registration(&self, chat_id: ChatId, caller: UserId) -> GameResult {
        self.rooms.with_room(chat_id, |room| {
            room.close_registration(caller, Utc::now())?;
            info!(
                "Registration closed in chat {} with {} players",
                chat_id.0,
                room.participants().len()
            );
            let started = Outbound::to_chat(
                chat_id,
                Notice::GameStarted {
                    order: room.participants().to_vec(),
                },
            );
            let mut intents = vec![started];
            intents.extend(prompt_choice(room));
            Ok(intents)
        })
    }

    pub fn choose_prompt_kind(
        &self,
        chat_id: ChatId,
        caller: UserId,
        kind: PromptKind,
    ) -> GameResult {
        self.rooms.with_room(chat_id, |room| {
            let text = room.choose_prompt(caller, kind, &self.content)?;
            let player = room
                .active_participant()
                .cloned()
                .ok_or(GameError::NotYourTurn)?;
            debug!("Issued a {} prompt to {} in chat {}", kind, caller.0, chat_id.0);

            let intent = Outbound::to_player(chat_id, player, Notice::Prompt { kind, text })
                .with_actions([GameAction::ConfirmAnswered { player: caller }]);
            Ok(vec![intent])
        })
    }

    pub fn confirm_answered(&self, chat_id: ChatId, caller: UserId) -> GameResult {
        self.rooms.with_room(chat_id, |room| {
            let next = room.confirm_answered(caller, Utc::now())?;
            debug!("Turn passed from {} to {} in chat {}", caller.0, next.0, chat_id.0);
            Ok(prompt_choice(room).into_iter().collect())
        })
    }

    /// Removes the chat's room; the caller must be an operator.
    ///
    /// Returns the removed room so the caller can announce the stop.
    pub fn stop(&self, chat_id: ChatId, caller: UserId) -> Result<Room, GameError> {
        if !self.operators.is_operator(caller) {
            return Err(GameError::NotAuthorized);
        }
        let room = self.rooms.delete(chat_id).ok_or(GameError::NotFound)?;
        info!("Game room in chat {} stopped by {}", chat_id.0, caller.0);
        Ok(room)
    }

    /// Skips every turn that has been idle for at least `timeout`
    pub fn expire_idle_turns(&self, now: DateTime<Utc>, timeout: Duration) -> Vec<Outbound> {
        self.rooms
            .for_each_room(|room| {
                let idle = room.turn()?.is_idle(now, timeout);
                if !idle {
                    return None;
                }
                let (skipped, next) = room.skip_turn(now)?;
                info!(
                    "Turn of {} timed out in chat {}, passing to {}",
                    skipped.0,
                    room.chat_id().0,
                    next.0
                );
                let skipped = Participant::new(skipped, room.display_name(skipped));
                let mut intents = vec![Outbound::to_chat(
                    room.chat_id(),
                    Notice::TurnSkipped { skipped },
                )];
                intents.extend(prompt_choice(room));
                Some(intents)
            })
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Asks the active player to pick a kind
fn prompt_choice(room: &Room) -> Option<Outbound> {
    let player = room.active_participant()?.clone();
    let actions = PromptKind::ALL.map(|kind| GameAction::Choose {
        kind,
        player: player.user_id,
    });
    Some(Outbound::to_player(room.chat_id(), player, Notice::ChoosePrompt).with_actions(actions))
}
