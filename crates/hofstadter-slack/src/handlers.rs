//! HTTP request handlers for the slash-command service.
//!
//! Implements the delay-estimator command endpoint and a liveness health
//! check using axum.

use crate::command;
use axum::{
    extract::Form,
    response::Json,
    routing::{get, post},
    Router,
};
use hofstadter_domain::compute_delay_estimate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Slash-command request body (form-encoded)
///
/// Slack sends many more fields (`token`, `team_id`, `user_name`, ...);
/// only `text` matters here and the rest are ignored.
#[derive(Debug, Deserialize)]
pub struct SlashCommandForm {
    /// The text typed after the command name; absent means empty
    #[serde(default)]
    pub text: String,
}

/// Response visibility, per the slash-command convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Shown only to the requesting user (help and errors)
    Ephemeral,
    /// Posted to the channel (successful estimates)
    InChannel,
}

/// Slash-command response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct SlashResponse {
    /// Who sees the message
    pub response_type: ResponseType,
    /// Human-readable message body (Slack mrkdwn)
    pub text: String,
}

impl SlashResponse {
    /// Create a response visible only to the requester
    pub fn ephemeral(text: String) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text,
        }
    }

    /// Create a response posted to the channel
    pub fn in_channel(text: String) -> Self {
        Self {
            response_type: ResponseType::InChannel,
            text,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall service status
    pub status: String,
    /// Version of the serving crate
    pub version: String,
}

/// POST /slack/delay - Run the delay estimator over the command text
///
/// Always answers HTTP 200: parse failures become ephemeral error messages
/// for the requesting user, never transport errors.
async fn delay_command(Form(form): Form<SlashCommandForm>) -> Json<SlashResponse> {
    let text = form.text.trim();
    debug!(text, "slash command received");

    if command::is_help(text) {
        return Json(SlashResponse::ephemeral(command::HELP_TEXT.to_string()));
    }

    match command::parse_command(text) {
        Ok(input) => {
            let estimate = compute_delay_estimate(&input);
            Json(SlashResponse::in_channel(command::format_estimate(
                &estimate,
            )))
        }
        Err(e) => {
            warn!(error = %e, "failed to parse slash command");
            Json(SlashResponse::ephemeral(format!("⚠️ Error: {}", e)))
        }
    }
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the axum router with all routes
///
/// The handlers are stateless, so no application state is threaded through.
pub fn create_router() -> Router {
    Router::new()
        .route("/slack/delay", post(delay_command))
        .route("/health", get(health_check))
}
