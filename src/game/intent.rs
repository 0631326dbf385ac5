//! Message intents produced by the game and the callback actions they carry.
//!
//! The core never talks to Telegram directly. Each operation returns a list of
//! [`Outbound`] intents which the bot layer renders and delivers.

use std::fmt;
use teloxide::types::{ChatId, UserId};

use crate::game::content::PromptKind;
use crate::game::room::Participant;

/// Prefix shared by every game callback payload
pub const ACTION_PREFIX: &str = "td";

/// Telegram rejects callback data longer than this
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

/// Interactive action attached to a message as a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Join,
    CloseRegistration,
    Choose { kind: PromptKind, player: UserId },
    ConfirmAnswered { player: UserId },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionParseError {
    #[error("not a game action: '{0}'")]
    ForeignPayload(String),

    #[error("unknown game action '{0}'")]
    UnknownAction(String),

    #[error("malformed game action '{0}'")]
    Malformed(String),
}

impl GameAction {
    pub fn is_game_payload(data: &str) -> bool {
        data.split(':').next() == Some(ACTION_PREFIX)
    }

    pub fn encode(&self) -> String {
        match self {
            GameAction::Join => format!("{ACTION_PREFIX}:join"),
            GameAction::CloseRegistration => format!("{ACTION_PREFIX}:close"),
            GameAction::Choose { kind, player } => {
                format!("{ACTION_PREFIX}:pick:{}:{}", kind.tag(), player.0)
            }
            GameAction::ConfirmAnswered { player } => format!("{ACTION_PREFIX}:done:{}", player.0),
        }
    }

    pub fn decode(data: &str) -> Result<Self, ActionParseError> {
        let parts: Vec<&str> = data.split(':').collect();
        if parts.first() != Some(&ACTION_PREFIX) {
            return Err(ActionParseError::ForeignPayload(data.to_string()));
        }
        let malformed = || ActionParseError::Malformed(data.to_string());

        match parts.as_slice() {
            [_, "join"] => Ok(GameAction::Join),
            [_, "close"] => Ok(GameAction::CloseRegistration),
            [_, "pick", kind, player] => Ok(GameAction::Choose {
                kind: PromptKind::from_tag(kind).ok_or_else(malformed)?,
                player: parse_user(player).ok_or_else(malformed)?,
            }),
            [_, "done", player] => Ok(GameAction::ConfirmAnswered {
                player: parse_user(player).ok_or_else(malformed)?,
            }),
            [_, "join" | "close" | "pick" | "done", ..] => Err(malformed()),
            _ => Err(ActionParseError::UnknownAction(data.to_string())),
        }
    }

    /// Player the button was issued to, if it is bound to one
    pub fn bound_player(&self) -> Option<UserId> {
        match self {
            GameAction::Choose { player, .. } | GameAction::ConfirmAnswered { player } => {
                Some(*player)
            }
            GameAction::Join | GameAction::CloseRegistration => None,
        }
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

fn parse_user(raw: &str) -> Option<UserId> {
    raw.parse::<u64>().ok().map(UserId)
}

/// What a message is about; the bot layer decides the wording
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    RoomOpened,
    Roster { participants: Vec<Participant> },
    GameStarted { order: Vec<Participant> },
    ChoosePrompt,
    Prompt { kind: PromptKind, text: String },
    TurnSkipped { skipped: Participant },
}

impl Notice {
    /// Short name used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            Notice::RoomOpened => "room_opened",
            Notice::Roster { .. } => "roster",
            Notice::GameStarted { .. } => "game_started",
            Notice::ChoosePrompt => "choose_prompt",
            Notice::Prompt { .. } => "prompt",
            Notice::TurnSkipped { .. } => "turn_skipped",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Post a new message in the chat
    Send,
    /// Replace the message whose button triggered the operation
    EditSource,
}

/// Request to send one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub chat_id: ChatId,
    pub addressee: Option<Participant>,
    pub notice: Notice,
    pub actions: Vec<GameAction>,
    pub delivery: Delivery,
}

impl Outbound {
    pub fn to_chat(chat_id: ChatId, notice: Notice) -> Self {
        Self {
            chat_id,
            addressee: None,
            notice,
            actions: Vec::new(),
            delivery: Delivery::Send,
        }
    }

    pub fn to_player(chat_id: ChatId, player: Participant, notice: Notice) -> Self {
        Self {
            addressee: Some(player),
            ..Self::to_chat(chat_id, notice)
        }
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = GameAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn replacing_source(mut self) -> Self {
        self.delivery = Delivery::EditSource;
        self
    }
}
