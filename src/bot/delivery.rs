use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::render::{render, Rendered};
use crate::game::{Delivery, Outbound};

/// Sends every intent in order.
///
/// `source` is the message whose button triggered the operation; intents
/// marked [`Delivery::EditSource`] replace it, or fall back to a new message
/// when there is none. A failed send is logged and the rest still go out.
pub async fn deliver(bot: &Bot, intents: &[Outbound], source: Option<&Message>) -> usize {
    let mut delivered = 0;
    for intent in intents {
        let Rendered { text, keyboard } = render(intent);

        let result = match (intent.delivery, source) {
            (Delivery::EditSource, Some(message)) => {
                let mut request = bot
                    .edit_message_text(message.chat.id, message.id, text)
                    .parse_mode(ParseMode::MarkdownV2);
                if let Some(keyboard) = keyboard {
                    request = request.reply_markup(keyboard);
                }
                request.await.map(|_| ())
            }
            _ => {
                let mut request = bot
                    .send_message(intent.chat_id, text)
                    .parse_mode(ParseMode::MarkdownV2);
                if let Some(keyboard) = keyboard {
                    request = request.reply_markup(keyboard);
                }
                request.await.map(|_| ())
            }
        };

        match result {
            Ok(()) => delivered += 1,
            Err(e) => tracing::error!(
                "Failed to deliver '{}' to chat {}: {}",
                intent.notice.label(),
                intent.chat_id.0,
                e
            ),
        }
    }
    delivered
}
