use chrono::Utc;
use teloxide::prelude::*;

use crate::bot::delivery::deliver;
use crate::bot::display_name;
use crate::bot::render::stopped_summary;
use crate::game::TruthOrDare;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{
    log_command_error, log_command_start, log_command_success, log_game_rejection,
};

/// Opens a room in the message's chat
pub async fn handle_start(bot: Bot, msg: Message, game: &TruthOrDare) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let name = display_name(user);
    let feedback = CommandFeedback::new(bot.clone(), msg.chat.id);
    log_command_start("game", &name, user.id, msg.chat.id);

    if msg.chat.is_private() {
        feedback
            .info("Truth or dare is played in groups. Add me to a group and try again.")
            .await?;
        return Ok(());
    }

    match game.start(msg.chat.id, user.id) {
        Ok(intents) => {
            if deliver(&bot, &intents, None).await < intents.len() {
                // The room exists but nobody can see the join button
                log_command_error(
                    "game",
                    &name,
                    user.id,
                    msg.chat.id,
                    "lobby message was not delivered",
                );
            } else {
                log_command_success("game", &name, user.id, msg.chat.id, None);
            }
        }
        Err(e) => {
            log_game_rejection("game", &name, user.id, msg.chat.id, &e);
            feedback.rejection(&e).await?;
        }
    }
    Ok(())
}

/// Tears down the chat's room; operators only
pub async fn handle_stop(bot: Bot, msg: Message, game: &TruthOrDare) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let name = display_name(user);
    log_command_start("stopgame", &name, user.id, msg.chat.id);

    match game.stop(msg.chat.id, user.id) {
        Ok(room) => {
            let sent = CommandFeedback::new(bot, msg.chat.id)
                .success(&stopped_summary(&room))
                .await;
            if let Err(e) = sent {
                log_command_error("stopgame", &name, user.id, msg.chat.id, &e.to_string());
                return Err(e);
            }
            let minutes = Utc::now().signed_duration_since(room.created_at()).num_minutes();
            let details = format!(
                "{} participants, room open for {} min",
                room.participants().len(),
                minutes
            );
            log_command_success("stopgame", &name, user.id, msg.chat.id, Some(&details));
        }
        Err(e) => {
            log_game_rejection("stopgame", &name, user.id, msg.chat.id, &e);
            CommandFeedback::new(bot, msg.chat.id).rejection(&e).await?;
        }
    }
    Ok(())
}
