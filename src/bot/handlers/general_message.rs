use std::sync::Arc;
use teloxide::prelude::*;

use crate::bot::commands::{game as game_commands, TextTrigger};
use crate::bot::handlers::HandlerResult;
use crate::game::TruthOrDare;
use crate::utils::feedback::CommandFeedback;

pub async fn handle_general_message(
    bot: Bot,
    msg: Message,
    game: Arc<TruthOrDare>,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match TextTrigger::parse(text) {
        Some(TextTrigger::StartGame) => game_commands::handle_start(bot, msg, &game).await?,
        Some(TextTrigger::StopGame) => game_commands::handle_stop(bot, msg, &game).await?,
        None if msg.chat.is_private() && text.starts_with('/') => {
            // Groups host other bots, so unknown commands are only answered in private
            let command = text.split_whitespace().next().unwrap_or(text);
            CommandFeedback::new(bot, msg.chat.id)
                .error(&format!("Unknown command: {command}. Use /help to see what I can do."))
                .await?;
        }
        None => {}
    }

    Ok(())
}
