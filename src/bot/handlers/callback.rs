use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::UserId;

use crate::bot::delivery::deliver;
use crate::bot::display_name;
use crate::bot::handlers::HandlerResult;
use crate::game::{GameAction, GameError, JoinOutcome, Outbound, TruthOrDare};
use crate::utils::logging::{log_command_success, log_game_rejection};

pub async fn callback_handler(bot: Bot, q: CallbackQuery, game: Arc<TruthOrDare>) -> HandlerResult {
    let user = &q.from;
    let username = display_name(user);

    let (Some(data), Some(message)) = (q.data.as_deref(), q.message.as_ref()) else {
        bot.answer_callback_query(q.id.clone()).await?;
        return Ok(());
    };
    let chat_id = message.chat.id;

    tracing::info!(
        "Callback received: '{}' from user {} ({}) in chat {}",
        data,
        username,
        user.id.0,
        chat_id.0
    );

    let action = match GameAction::decode(data) {
        Ok(action) => action,
        Err(e) => {
            tracing::warn!("Ignoring callback: {}", e);
            bot.answer_callback_query(q.id.clone())
                .text("Invalid request")
                .await?;
            return Ok(());
        }
    };

    match run_action(&game, chat_id, user.id, &username, action) {
        Ok((toast, intents)) => {
            deliver(&bot, &intents, Some(message)).await;
            bot.answer_callback_query(q.id.clone()).text(toast).await?;
            log_command_success(&action.to_string(), &username, user.id, chat_id, None);
        }
        Err(e) => {
            log_game_rejection(&action.to_string(), &username, user.id, chat_id, &e);
            bot.answer_callback_query(q.id.clone())
                .text(e.to_string())
                .await?;
        }
    }

    Ok(())
}

/// Applies a decoded button press and picks the toast shown to the presser
pub fn run_action(
    game: &TruthOrDare,
    chat_id: ChatId,
    caller: UserId,
    caller_name: &str,
    action: GameAction,
) -> Result<(&'static str, Vec<Outbound>), GameError> {
    // Buttons bound to a player are useless to anyone else; reject before locking the room
    if action.bound_player().is_some_and(|player| player != caller) {
        return Err(GameError::NotYourTurn);
    }

    match action {
        GameAction::Join => {
            let (outcome, intents) = game.join(chat_id, caller, caller_name)?;
            let toast = match outcome {
                JoinOutcome::Joined => "You joined the game ✅",
                JoinOutcome::AlreadyJoined => "You already joined!",
            };
            Ok((toast, intents))
        }
        GameAction::CloseRegistration => game
            .close_registration(chat_id, caller)
            .map(|intents| ("Registration closed, the game is on!", intents)),
        GameAction::Choose { kind, .. } => game
            .choose_prompt_kind(chat_id, caller, kind)
            .map(|intents| ("Prompt sent", intents)),
        GameAction::ConfirmAnswered { .. } => game
            .confirm_answered(chat_id, caller)
            .map(|intents| ("Next turn", intents)),
    }
}
