use axum::{
    Json, Router,
    routing::{get, post},
};
use log::info;
use std::collections::HashSet;
use std::net::SocketAddr;

use crate::data::{GenerateRequest, GenerateResponse};
use crate::error::{RequestError, ServerError};
use crate::generator;

fn validate(input: &GenerateRequest) -> Result<(), RequestError> {
    if let Some(config) = &input.config {
        config.validate()?;
    }
    let mut seen = HashSet::new();
    for assignment in &input.assignments {
        if assignment.id.is_empty() {
            return Err(RequestError::EmptyAssignmentId);
        }
        if !seen.insert(assignment.id.as_str()) {
            return Err(RequestError::DuplicateAssignmentId(assignment.id.clone()));
        }
    }
    Ok(())
}

async fn generate_handler(
    Json(input): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, RequestError> {
    validate(&input)?;
    let config = input.config.unwrap_or_default();
    Ok(Json(generator::generate(
        &input.assignments,
        &input.teachers,
        &input.class_label,
        &config,
    )))
}

async fn health() -> &'static str {
    "ok"
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/timetable/generate", post(generate_handler))
}

pub async fn run_server(address: SocketAddr) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(ServerError::Bind)?;

    info!("Server running at http://{}", address);

    axum::serve(listener, router()).await.map_err(ServerError::Serve)
}
