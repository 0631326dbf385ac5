pub mod game;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Covo commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Open a truth-or-dare room in this group")]
    Game,
    #[command(description = "Stop the running game (operators only)")]
    StopGame,
}

/// Slash-less phrases that drive the game from plain group messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTrigger {
    StartGame,
    StopGame,
}

impl TextTrigger {
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        match normalized.as_str() {
            "game" | "بازی" => Some(TextTrigger::StartGame),
            "stop game" | "توقف بازی" => Some(TextTrigger::StopGame),
            _ => None,
        }
    }
}
