use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::game::GameError;
use crate::utils::markdown::escape_markdown;

/// Feedback types for different command outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
}

impl FeedbackType {
    pub fn emoji(&self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Warning => "⚠️",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
        }
    }

    /// Tone used when reporting a refused game operation in the chat
    pub fn for_rejection(error: &GameError) -> Self {
        match error {
            GameError::AlreadyExists | GameError::NotFound => FeedbackType::Info,
            GameError::EmptyBank(_) => FeedbackType::Warning,
            _ => FeedbackType::Error,
        }
    }
}

/// Builds the MarkdownV2 body of a feedback message
pub fn format_feedback(feedback_type: FeedbackType, message: &str) -> String {
    format!("{} {}", feedback_type.emoji(), escape_markdown(message))
}

/// Short chat replies for slash commands and text triggers
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    pub async fn send(
        &self,
        feedback_type: FeedbackType,
        message: &str,
    ) -> ResponseResult<Message> {
        self.bot
            .send_message(self.chat_id, format_feedback(feedback_type, message))
            .parse_mode(ParseMode::MarkdownV2)
            .await
    }

    pub async fn success(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Success, message).await
    }

    pub async fn error(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Error, message).await
    }

    pub async fn info(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Info, message).await
    }

    /// Reports a refused game operation using its display text
    pub async fn rejection(&self, error: &GameError) -> ResponseResult<Message> {
        self.send(FeedbackType::for_rejection(error), &error.to_string()).await
    }
}
