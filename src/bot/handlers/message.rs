use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{game as game_commands, Command};
use crate::bot::handlers::HandlerResult;
use crate::game::TruthOrDare;

const WELCOME_TEXT: &str = "🎮 Hi, I'm Covo!\n\n\
    Add me to a group and send /game (or just \"game\") to open a truth-or-dare room.\n\
    Use /help to see all commands.";

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    game: Arc<TruthOrDare>,
) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            bot.send_message(msg.chat.id, WELCOME_TEXT).await?;
        }
        Command::Game => {
            game_commands::handle_start(bot, msg, &game).await?;
        }
        Command::StopGame => {
            game_commands::handle_stop(bot, msg, &game).await?;
        }
    }
    Ok(())
}
