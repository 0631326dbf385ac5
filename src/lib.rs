//! # Covo Bot
//!
//! A Telegram group bot hosting truth-or-dare game rooms.
//!
//! ## Features
//! - One game room per group, opened by anyone and stopped by operators
//! - Join-order turn rotation with dare and truth prompts
//! - Prompt banks loaded from JSON files at startup
//! - Optional skipping of turns left unanswered for too long
//! - Health endpoints for container orchestration

/// Telegram commands, update handlers and message rendering
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Game rooms, turn rotation and prompt content
pub mod game;
/// Background services like health checks and the idle-turn sweep
pub mod services;
/// Logging, feedback and MarkdownV2 helpers
pub mod utils;
