//! Error handling for the REST API
//!
//! Every failure is returned as the same JSON envelope with a stable `code`
//! for programmatic handling and a human-readable `message`.

use actix_web::{
    error::ResponseError,
    http::StatusCode,
    HttpResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::error::PitcherError;
use crate::thread::DataIntegrityError;

/// Standardized error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Field-specific validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Validation failed: {message}")]
    ValidationFailed {
        message: String,
        errors: Vec<ValidationError>,
    },

    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),

    #[error("Internal server error: {message}")]
    InternalError { message: String },
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::ValidationFailed { .. } => "VALIDATION_FAILED",
            ApiError::DataIntegrity(_) => "DATA_INTEGRITY",
            ApiError::InternalError { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn missing_field(field: &str) -> Self {
        ApiError::ValidationFailed {
            message: format!("Missing required field: {}", field),
            errors: vec![ValidationError {
                field: field.to_string(),
                message: format!("{} is required", field),
                constraint: Some("required".to_string()),
            }],
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::ValidationFailed { errors, .. } => Some(json!({ "validationErrors": errors })),
            ApiError::DataIntegrity(err) => Some(json!({
                "recordKind": err.kind,
                "recordId": err.id,
                "field": err.field,
                "value": err.value,
            })),
            _ => None,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            ApiError::DataIntegrity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("API error: {:?}", self);
        } else {
            log::warn!("API error: {}", self);
        }

        HttpResponse::build(status_code).json(ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            details: self.details(),
            timestamp: chrono::Utc::now(),
        })
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let validation_errors: Vec<ValidationError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(|e| ValidationError {
                    field: field.to_string(),
                    message: e.message.as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                    constraint: Some(e.code.to_string()),
                })
            })
            .collect();

        ApiError::ValidationFailed {
            message: "Request validation failed".to_string(),
            errors: validation_errors,
        }
    }
}

impl From<PitcherError> for ApiError {
    fn from(err: PitcherError) -> Self {
        match err {
            PitcherError::DataIntegrity(inner) => ApiError::DataIntegrity(inner),
            PitcherError::Address(e) => ApiError::ValidationFailed {
                message: format!("Invalid address: {}", e),
                errors: vec![ValidationError {
                    field: "recipient".to_string(),
                    message: e.to_string(),
                    constraint: Some("email".to_string()),
                }],
            },
            other => ApiError::InternalError { message: other.to_string() },
        }
    }
}
