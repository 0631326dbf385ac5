//! Telegram MarkdownV2 helpers.
//!
//! Every piece of user-supplied or static text that goes into a MarkdownV2
//! message has to pass through [`escape_markdown`] first.

use teloxide::types::UserId;

/// Escapes every character with special meaning in MarkdownV2
///
/// # Example
/// ```
/// use covo_bot::utils::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("Truth or dare?!"), "Truth or dare?\\!");
/// ```
pub fn escape_markdown(text: &str) -> String {
    const SPECIAL: &[char] = &[
        '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.',
        '!',
    ];

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Inline mention that pings the user even without a public username
pub fn mention(name: &str, user_id: UserId) -> String {
    format!("[{}](tg://user?id={})", escape_markdown(name), user_id.0)
}
