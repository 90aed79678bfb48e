//! Game generation endpoint
//!
//! POST /generate-game - `{ "config": { prompt, brandUrl, gameType,
//! dominantColor, logo, backgroundImage } }` → `{ gameData, debug }`

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::AppState;
use crate::game::{AssetRef, GameConfiguration, GameType, GenerateError, GenerationInput};
use crate::pipeline::GenerationLog;

/// Build the generation router
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-game", post(generate_game))
}

/// Request envelope
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub config: RequestConfig,
}

/// Form fields as sent by the editor. Empty strings mean "not provided".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestConfig {
    pub prompt: String,
    pub brand_url: Option<String>,
    pub game_type: Option<String>,
    pub dominant_color: Option<String>,
    pub logo: Option<String>,
    pub background_image: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<RequestConfig> for GenerationInput {
    type Error = GenerateError;

    fn try_from(config: RequestConfig) -> Result<Self, Self::Error> {
        let game_type = match non_empty(config.game_type) {
            Some(raw) => Some(GameType::from_str(&raw).ok_or(GenerateError::UnknownGameType(raw))?),
            None => None,
        };

        Ok(GenerationInput {
            prompt: config.prompt,
            brand_url: non_empty(config.brand_url),
            game_type,
            dominant_color: non_empty(config.dominant_color),
            logo: config.logo.and_then(AssetRef::new),
            background_image: config.background_image.and_then(AssetRef::new),
        })
    }
}

/// Successful response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    game_data: GameConfiguration,
    debug: GenerationLog,
}

/// Error response
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn status_for(error: &GenerateError) -> StatusCode {
    match error {
        GenerateError::EmptyPrompt
        | GenerateError::UnknownGameType(_)
        | GenerateError::InvalidColor(_) => StatusCode::BAD_REQUEST,
        GenerateError::Advisory(_) => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(error: GenerateError) -> axum::response::Response {
    (
        status_for(&error),
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// Generate a contest game
async fn generate_game(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse {
    let input = match GenerationInput::try_from(request.config) {
        Ok(input) => input,
        Err(e) => return error_response(e),
    };

    match state.generator.generate(input).await {
        Ok(generation) => Json(GenerateResponse {
            game_data: generation.game,
            debug: generation.log,
        })
        .into_response(),
        Err(e) => {
            warn!("Game generation failed: {}", e);
            error_response(e)
        }
    }
}
