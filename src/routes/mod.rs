// Route exports
pub mod bmi;
pub mod profile;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::config::{DisplaySettings, Settings};
use crate::models::{ErrorResponse, ProfileCard};
use crate::services::DisplayState;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub display: DisplayState,
    pub presentation: DisplaySettings,
    pub profile: ProfileCard,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            display: DisplayState::new(
                settings.display.notice_duration_secs,
                settings.display.notice_capacity,
            ),
            presentation: settings.display.clone(),
            profile: settings.profile.clone(),
        }
    }
}

/// Errors returned by handlers as JSON
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::NotFound(_) => "not_found",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
            notice_id: None,
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

/// JSON extractor config that reports malformed bodies as [`ErrorResponse`]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(bmi::configure)
            .configure(profile::configure),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_api_error_status() {
        assert_eq!(
            ApiError::InvalidJson("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("nothing".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_state_from_settings() {
        let state = AppState::from_settings(&Settings::default());
        assert_eq!(state.display.notice_ttl().as_secs(), 4);
        assert_eq!(state.profile, ProfileCard::default());
    }
}
