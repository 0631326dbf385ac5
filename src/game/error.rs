use crate::game::content::PromptKind;

/// Rejections returned by room operations.
///
/// A rejected operation leaves the room untouched. The `Display` text is
/// short enough to be shown as a callback toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("A game is already active in this chat")]
    AlreadyExists,

    #[error("There is no active game in this chat")]
    NotFound,

    #[error("Registration is closed")]
    RegistrationClosed,

    #[error("Only the player who opened the room can do that")]
    NotStarter,

    #[error("Registration was already closed")]
    AlreadyRunning,

    #[error("Nobody has joined yet")]
    NoParticipants,

    #[error("It's not your turn")]
    NotYourTurn,

    #[error("The {0} bank is empty")]
    EmptyBank(PromptKind),

    #[error("Only a bot operator can stop the game")]
    NotAuthorized,

    #[error("You already have a prompt for this turn")]
    PromptAlreadyIssued,
}

impl GameError {
    /// Stable identifier used in log lines
    pub fn code(&self) -> &'static str {
        match self {
            GameError::AlreadyExists => "already_exists",
            GameError::NotFound => "not_found",
            GameError::RegistrationClosed => "registration_closed",
            GameError::NotStarter => "not_starter",
            GameError::AlreadyRunning => "already_running",
            GameError::NoParticipants => "no_participants",
            GameError::NotYourTurn => "not_your_turn",
            GameError::EmptyBank(_) => "empty_bank",
            GameError::NotAuthorized => "not_authorized",
            GameError::PromptAlreadyIssued => "prompt_already_issued",
        }
    }
}
