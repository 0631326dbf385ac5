pub mod commands;
pub mod delivery;
pub mod handlers;
pub mod render;

use teloxide::types::User;

/// Name shown for a player: `@username` when set, otherwise the first name
pub fn display_name(user: &User) -> String {
    match &user.username {
        Some(username) if !username.is_empty() => format!("@{username}"),
        _ => user.first_name.clone(),
    }
}
