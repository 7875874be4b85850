//! JSON API for player generation
//!
//! String-in/string-out endpoints for frontend integration: recruiting class
//! generation and team roster generation. Every response is wrapped in
//! `ApiResponse`, so callers can always parse the envelope even when the
//! request fails.

use crate::error::GenError;
use crate::models::Player;
use crate::player::PlayerGenerator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with a stable code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }

    fn from_gen_error(error: &GenError) -> Self {
        let code = match error {
            GenError::InvalidParameter(_) => "INVALID_PARAMETER",
            GenError::InvalidDistribution(_) => "INVALID_DISTRIBUTION",
            GenError::SerializationError(_) => "SERIALIZATION_ERROR",
            GenError::DeserializationError(_) => "DESERIALIZATION_ERROR",
        };
        Self::new(code, &error.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Recruiting class generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRequest {
    pub schema_version: Option<String>,
    pub count: usize,
    pub seed: Option<u64>,
}

/// Team roster generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequest {
    pub schema_version: Option<String>,
    pub team_id: String,
    /// Program prestige, 0-100
    pub prestige: u8,
    pub count: usize,
    pub seed: Option<u64>,
}

/// Generation response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub players: Vec<Player>,
    pub generated_with_seed: Option<u64>,
}

fn generator_for(seed: Option<u64>) -> PlayerGenerator {
    match seed {
        Some(seed) => PlayerGenerator::from_seed(seed),
        None => PlayerGenerator::from_entropy(),
    }
}

fn encode<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
}

/// Generate a recruiting class from a JSON request string
pub fn generate_class_json(request_json: &str) -> String {
    info!("Processing recruiting class request");

    let request: ClassRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse ClassRequest: {}", e);
            let err = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return encode(&ApiResponse::<GenerationResponse>::error(err));
        }
    };

    let mut generator = generator_for(request.seed);
    match generator.generate_recruiting_class(request.count) {
        Ok(players) => {
            info!("Generated recruiting class of {}", players.len());
            encode(&ApiResponse::success(GenerationResponse {
                players,
                generated_with_seed: request.seed,
            }))
        }
        Err(e) => {
            error!("Recruiting class generation failed: {}", e);
            encode(&ApiResponse::<GenerationResponse>::error(ApiError::from_gen_error(&e)))
        }
    }
}

/// Generate a team roster from a JSON request string
pub fn generate_roster_json(request_json: &str) -> String {
    info!("Processing team roster request");

    let request: RosterRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse RosterRequest: {}", e);
            let err = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return encode(&ApiResponse::<GenerationResponse>::error(err));
        }
    };

    let mut generator = generator_for(request.seed);
    match generator.generate_team_roster(&request.team_id, request.prestige, request.count) {
        Ok(players) => {
            info!("Generated roster of {} for {}", players.len(), request.team_id);
            encode(&ApiResponse::success(GenerationResponse {
                players,
                generated_with_seed: request.seed,
            }))
        }
        Err(e) => {
            error!("Roster generation failed: {}", e);
            encode(&ApiResponse::<GenerationResponse>::error(ApiError::from_gen_error(&e)))
        }
    }
}
