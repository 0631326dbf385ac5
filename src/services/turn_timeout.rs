use chrono::{Duration, Utc};
use std::sync::Arc;
use teloxide::Bot;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::bot::delivery::deliver;
use crate::config::timeout_duration;
use crate::game::TruthOrDare;

/// Periodically skips turns nobody has answered within the configured timeout
pub struct TurnTimeoutService {
    bot: Bot,
    game: Arc<TruthOrDare>,
    timeout: Duration,
    scheduler: JobScheduler,
}

impl TurnTimeoutService {
    pub async fn new(
        bot: Bot,
        game: Arc<TruthOrDare>,
        timeout_minutes: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let timeout = timeout_duration(timeout_minutes)
            .ok_or_else(|| format!("turn timeout of {timeout_minutes} minutes is out of range"))?;
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            game,
            timeout,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bot = self.bot.clone();
        let game = self.game.clone();
        let timeout = self.timeout;

        // Top of every minute
        let sweep_job = Job::new_async("0 * * * * *", move |_uuid, _l| {
            let bot = bot.clone();
            let game = game.clone();
            Box::pin(async move {
                sweep_idle_turns(&bot, &game, timeout).await;
            })
        })?;

        self.scheduler.add(sweep_job).await?;
        self.scheduler.start().await?;

        tracing::info!(
            "Turn timeout service started - idle turns are skipped after {} minutes",
            self.timeout.num_minutes()
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }
}

/// Advances every stalled turn and announces it; returns how many messages went out
pub async fn sweep_idle_turns(bot: &Bot, game: &TruthOrDare, timeout: Duration) -> usize {
    // Room locks are released before any network call
    let intents = game.expire_idle_turns(Utc::now(), timeout);
    if intents.is_empty() {
        return 0;
    }
    tracing::debug!("Idle turn sweep produced {} messages", intents.len());
    deliver(bot, &intents, None).await
}
