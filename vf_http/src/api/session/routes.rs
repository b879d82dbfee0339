use aide::axum::routing::get_with;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::Json;
use vf_system::RealtimeSession;
use crate::api::error::ApiResponseError;
use crate::api::{ApiResult, ApiRouter, AppState};

pub fn config() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route("/session", get_with(create_session, create_session_docs))
        .with_path_items(|t| t.tag("Realtime Session").description("Ephemeral credentials for the realtime voice API"))
}

#[tracing::instrument(skip(state))]
pub async fn create_session(state: State<AppState>) -> ApiResult<Json<RealtimeSession>> {
    let session = state.sessions.create_session().await?;

    Ok(Json(session))
}

fn create_session_docs(op: TransformOperation) -> TransformOperation {
    op.description(
        "Mint a new ephemeral session with the upstream realtime API.\n\
        The upstream body is returned untouched, every call creates a new session.",
    )
    .response::<200, Json<RealtimeSession>>()
    .response_with::<500, Json<ApiResponseError>, _>(|res| {
        res.description("No API key configured, or the upstream could not be reached")
    })
}
