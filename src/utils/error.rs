use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use tracing::error;

use super::response::ErrorResponse;

/// Application-wide error type.
///
/// Every variant maps to an HTTP status and a machine-readable code so the
/// response envelope stays uniform across handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    ValidationError(String),
    TournamentNotFound(String),
    GroupNotFound(String),
    StandingNotFound(String),
    MatchNotFound(String),
    TeamNotFound(String),
    /// Local and visitor team of a match are the same.
    MatchTeamsEqual(String),
    /// Unique constraint violation, surfaced as a user-facing conflict.
    DuplicateEntry(String),
    InternalError(String),
}

impl AppError {
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg)
            | AppError::ValidationError(msg)
            | AppError::TournamentNotFound(msg)
            | AppError::GroupNotFound(msg)
            | AppError::StandingNotFound(msg)
            | AppError::MatchNotFound(msg)
            | AppError::TeamNotFound(msg)
            | AppError::MatchTeamsEqual(msg)
            | AppError::DuplicateEntry(msg) => msg.clone(),
            // Internal detail is logged, never sent to the client.
            AppError::InternalError(_) => "Internal server error.".to_string(),
        }
    }

    pub fn error_code(&self) -> String {
        match self {
            AppError::BadRequest(_) => "COMMON400",
            AppError::ValidationError(_) => "COMMON400",
            AppError::TournamentNotFound(_) => "TOURNAMENT4041",
            AppError::GroupNotFound(_) => "GROUP4041",
            AppError::StandingNotFound(_) => "STANDING4041",
            AppError::MatchNotFound(_) => "MATCH4041",
            AppError::TeamNotFound(_) => "TEAM4041",
            AppError::MatchTeamsEqual(_) => "MATCH4001",
            AppError::DuplicateEntry(_) => "COMMON409",
            AppError::InternalError(_) => "COMMON500",
        }
        .to_string()
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::TournamentNotFound(_) => StatusCode::NOT_FOUND,
            AppError::GroupNotFound(_) => StatusCode::NOT_FOUND,
            AppError::StandingNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MatchNotFound(_) => StatusCode::NOT_FOUND,
            AppError::TeamNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MatchTeamsEqual(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateEntry(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        match &self {
            AppError::InternalError(detail) => {
                error!("Internal Server Error: {}", detail);
            }
            _ => {
                error!("Error [{}]: {}", error_code, message);
            }
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status, Json(error_response)).into_response()
    }
}

/// Flatten validator output into a single accumulated message.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for '{}'.", field))
                })
            })
            .collect();
        messages.sort();
        AppError::ValidationError(messages.join(" "))
    }
}

/// Classify a persistence error through the driver's typed `SqlErr` instead of
/// string-matching on the message text.
///
/// Unique violations become a conflict carrying the caller-supplied message,
/// foreign-key violations a bad request naming the broken reference, anything
/// else an internal error.
pub fn classify_db_err(err: DbErr, duplicate_message: impl Into<String>) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::DuplicateEntry(duplicate_message.into())
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::BadRequest(
            "The operation references a row that does not exist or is still referenced."
                .to_string(),
        ),
        _ => AppError::InternalError(err.to_string()),
    }
}
