use teloxide::types::{ChatId, UserId};
use tracing::{error, info, warn};

use crate::game::GameError;

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: UserId, chat_id: ChatId) {
    info!(
        "CMD_START: {} by {}({}) in chat {}",
        command, user, user_id.0, chat_id.0
    );
}

/// Logs command completion with consistent format
pub fn log_command_success(
    command: &str,
    user: &str,
    user_id: UserId,
    chat_id: ChatId,
    details: Option<&str>,
) {
    match details {
        Some(d) => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {} - {}",
            command, user, user_id.0, chat_id.0, d
        ),
        None => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {}",
            command, user, user_id.0, chat_id.0
        ),
    }
}

/// Logs failures talking to Telegram while handling a command
pub fn log_command_error(command: &str, user: &str, user_id: UserId, chat_id: ChatId, error: &str) {
    error!(
        "CMD_ERROR: {} by {}({}) in chat {} - {}",
        command, user, user_id.0, chat_id.0, error
    );
}

/// Logs a game operation the room refused
pub fn log_game_rejection(
    action: &str,
    user: &str,
    user_id: UserId,
    chat_id: ChatId,
    reason: &GameError,
) {
    warn!(
        "GAME_REJECTED: {} by {}({}) in chat {} - {} ({})",
        action,
        user,
        user_id.0,
        chat_id.0,
        reason.code(),
        reason
    );
}

pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
