use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::config::MAX_ROOM_BASE;
use crate::data::{AssignmentId, Period};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be between 0 and 10, got {value}")]
    ThresholdOutOfRange { name: &'static str, value: u32 },
    #[error("periodsPerDay must be at most 12, got {0}")]
    TooManyPeriods(Period),
    #[error("{name} must be at most {max}, got {value}", max = MAX_ROOM_BASE)]
    RoomBaseOutOfRange { name: &'static str, value: u32 },
}

/// Rejections of a generation request, before any schedule is built.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid generator config: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("assignment id {0} appears more than once")]
    DuplicateAssignmentId(AssignmentId),
    #[error("assignment id must not be empty")]
    EmptyAssignmentId,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}
