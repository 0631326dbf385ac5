use covo_bot::bot::commands::{Command, TextTrigger};
use teloxide::utils::command::BotCommands;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_help_command_parsing() {
        let result = Command::parse("/help", "testbot");
        assert_eq!(result.unwrap(), Command::Help);
    }

    #[test]
    fn test_start_command_parsing() {
        let result = Command::parse("/start", "testbot");
        assert_eq!(result.unwrap(), Command::Start);
    }

    #[test]
    fn test_game_command_parsing() {
        assert_eq!(Command::parse("/game", "testbot").unwrap(), Command::Game);
        // Groups address commands to a specific bot
        assert_eq!(Command::parse("/game@testbot", "testbot").unwrap(), Command::Game);
    }

    #[test]
    fn test_stopgame_command_parsing() {
        assert_eq!(Command::parse("/stopgame", "testbot").unwrap(), Command::StopGame);
    }

    #[test]
    fn test_command_for_other_bot() {
        assert!(Command::parse("/game@otherbot", "testbot").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(Command::parse("/schedule", "testbot").is_err());
        assert!(Command::parse("/truth", "testbot").is_err());
    }

    #[test]
    fn test_descriptions_list_game_commands() {
        let help = Command::descriptions().to_string();
        assert!(help.contains("/game"));
        assert!(help.contains("/stopgame"));
    }

    #[test]
    fn test_text_triggers_in_both_languages() {
        assert_eq!(TextTrigger::parse("game"), Some(TextTrigger::StartGame));
        assert_eq!(TextTrigger::parse("بازی"), Some(TextTrigger::StartGame));
        assert_eq!(TextTrigger::parse("Stop Game"), Some(TextTrigger::StopGame));
        assert_eq!(TextTrigger::parse("توقف بازی"), Some(TextTrigger::StopGame));
    }

    #[test]
    fn test_ordinary_chatter_is_not_a_trigger() {
        for text in ["let's play a game", "/game", "games", "بازی کنیم"] {
            assert_eq!(TextTrigger::parse(text), None, "'{text}' should not trigger");
        }
    }
}
