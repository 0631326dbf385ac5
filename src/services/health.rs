use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::game::{PromptKind, TruthOrDare};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub games: GameHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameHealth {
    pub active_rooms: usize,
    pub dare_prompts: usize,
    pub truth_prompts: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub game: Arc<TruthOrDare>,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(game: Arc<TruthOrDare>) -> Self {
        let state = AppState {
            game,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(state);

        Self { router }
    }
}

/// Both banks must hold prompts for every turn to be playable
fn content_ready(game: &TruthOrDare) -> bool {
    PromptKind::ALL
        .iter()
        .all(|kind| !game.content().is_empty(*kind))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;
    let content = state.game.content();

    Json(HealthResponse {
        status: (if content_ready(&state.game) { "healthy" } else { "degraded" }).to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        games: GameHealth {
            active_rooms: state.game.active_games(),
            dare_prompts: content.len(PromptKind::Dare),
            truth_prompts: content.len(PromptKind::Truth),
        },
        uptime_seconds: uptime,
    })
}

async fn readiness_check(State(state): State<AppState>) -> Result<Json<&'static str>, StatusCode> {
    if content_ready(&state.game) {
        Ok(Json("ready"))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}
