//! Liveness probe, answers as long as the process can respond to HTTP at all.
use aide::axum::routing::get_with;
use aide::transform::TransformOperation;
use axum::Json;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use crate::api::{ApiRouter, AppState};

pub fn config() -> ApiRouter<AppState> {
    ApiRouter::new().api_route("/health", get_with(health_check, health_check_docs))
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: crate::SERVICE_NAME.to_string(),
    })
}

fn health_check_docs(op: TransformOperation) -> TransformOperation {
    op.description("Always reports healthy, independent of configuration or upstream availability.")
        .response::<200, Json<HealthStatus>>()
}
