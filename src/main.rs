//! # Covo Bot Main Entry Point
//!
//! Initializes logging, loads configuration and prompt content, starts the
//! idle-turn sweep and health server, and runs the Telegram dispatcher.

use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use covo_bot::bot::handlers::schema;
use covo_bot::config::Config;
use covo_bot::game::{ContentBank, OperatorList, TruthOrDare};
use covo_bot::services::health::HealthService;
use covo_bot::services::turn_timeout::TurnTimeoutService;
use covo_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "covo_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Covo Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Content: {}, HTTP Port: {}, Operators: {}",
        config.content_dir.display(),
        config.http_port,
        config.operator_ids.len()
    );

    // Prompts must be in memory before the first update is handled
    let content = if config.content_required {
        ContentBank::load(&config.content_dir)
            .with_context(|| {
                format!("Failed to load prompts from {}", config.content_dir.display())
            })?
    } else {
        ContentBank::load_lenient(&config.content_dir)
    };

    let operators = OperatorList::new(config.operator_ids.iter().copied());
    let game = Arc::new(TruthOrDare::new(Arc::new(content), Arc::new(operators)));

    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);

    let mut turn_timeout = if config.turn_timeout_minutes > 0 {
        let mut service =
            TurnTimeoutService::new(bot.clone(), game.clone(), config.turn_timeout_minutes)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create turn timeout service: {}", e))?;
        if let Err(e) = service.start().await {
            tracing::error!("Failed to start turn timeout service: {}", e);
        }
        Some(service)
    } else {
        log_system_event("Turn timeout disabled", Some("turns wait for their player indefinitely"));
        None
    };

    let health_service = HealthService::new(game.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, schema())
            .dependencies(dptree::deps![game])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result = bot_task => {
            if let Err(e) = result {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result = health_task => {
            if let Err(e) = result {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    if let Some(service) = turn_timeout.as_mut() {
        if let Err(e) = service.stop().await {
            tracing::warn!("Error stopping turn timeout service: {}", e);
        }
    }

    log_system_event("Application stopped", None);
    Ok(())
}
