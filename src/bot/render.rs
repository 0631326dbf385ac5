//! Turns game intents into MarkdownV2 text and inline keyboards.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::game::{GameAction, Notice, Outbound, Participant, PromptKind, Room};
use crate::utils::markdown::{escape_markdown, mention};

#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

pub fn render(outbound: &Outbound) -> Rendered {
    Rendered {
        text: render_text(&outbound.notice, outbound.addressee.as_ref()),
        keyboard: keyboard(&outbound.actions),
    }
}

fn render_text(notice: &Notice, addressee: Option<&Participant>) -> String {
    let who = addressee
        .map(player_mention)
        .unwrap_or_else(|| escape_markdown("Player"));

    match notice {
        Notice::RoomOpened => format!(
            "🎮 *Truth or Dare* {}\n{}\n\n{}",
            escape_markdown("is open!"),
            escape_markdown("Tap the button below to join."),
            escape_markdown(
                "Once everyone is in, whoever opened the room closes registration \
                 and the game starts."
            )
        ),
        Notice::Roster { participants } => format!(
            "🎮 *Truth or Dare*\n{}\n{}\n\n{}",
            escape_markdown(&format!("Players ({}):", participants.len())),
            participants
                .iter()
                .map(player_mention)
                .collect::<Vec<_>>()
                .join("\n"),
            escape_markdown("Tap the button to join. The room opener can close registration.")
        ),
        Notice::GameStarted { order } => format!(
            "🚀 {}\n{}\n\n{} {}",
            escape_markdown("The game has started!"),
            escape_markdown("Turns follow the join order."),
            escape_markdown("Order:"),
            order
                .iter()
                .map(player_mention)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Notice::ChoosePrompt => format!(
            "{} {}\n👉 {}",
            who,
            escape_markdown("it's your turn. Pick one:"),
            escape_markdown("truth or dare?")
        ),
        Notice::Prompt { kind, text } => format!(
            "{} *{}*\n{}\n\n{} {}",
            kind_emoji(*kind),
            kind_title(*kind),
            escape_markdown(text),
            who,
            escape_markdown("reply to this message with your answer, then tap the button below.")
        ),
        Notice::TurnSkipped { skipped } => format!(
            "⏰ {} {}",
            player_mention(skipped),
            escape_markdown("took too long, skipping the turn.")
        ),
    }
}

/// Plain-text summary sent after an operator stops a game
pub fn stopped_summary(room: &Room) -> String {
    format!(
        "Game stopped and the room is closed ({} players took part).",
        room.participants().len()
    )
}

pub fn button_label(action: &GameAction) -> String {
    match action {
        GameAction::Join => "➕ Join".to_string(),
        GameAction::CloseRegistration => "🔒 Close registration".to_string(),
        GameAction::Choose { kind, .. } => format!("{} {}", kind_emoji(*kind), kind_title(*kind)),
        GameAction::ConfirmAnswered { .. } => "✅ I answered".to_string(),
    }
}

/// Prompt-kind choices share a row; every other action gets its own
fn keyboard(actions: &[GameAction]) -> Option<InlineKeyboardMarkup> {
    if actions.is_empty() {
        return None;
    }

    let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::new();
    let mut choices = Vec::new();
    for action in actions {
        let button = InlineKeyboardButton::callback(button_label(action), action.encode());
        match action {
            GameAction::Choose { .. } => choices.push(button),
            _ => rows.push(vec![button]),
        }
    }
    if !choices.is_empty() {
        rows.push(choices);
    }
    Some(InlineKeyboardMarkup::new(rows))
}

fn player_mention(player: &Participant) -> String {
    mention(&player.display_name, player.user_id)
}

fn kind_emoji(kind: PromptKind) -> &'static str {
    match kind {
        PromptKind::Dare => "🔥",
        PromptKind::Truth => "🫣",
    }
}

fn kind_title(kind: PromptKind) -> &'static str {
    match kind {
        PromptKind::Dare => "Dare",
        PromptKind::Truth => "Truth",
    }
}
