//! Static host for the pre-built web client.
use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use crate::api::AppState;
use crate::config::DirectoryConfig;

/// Plain axum routes, file responses have no meaningful schema for the API docs.
pub fn config(dirs: &DirectoryConfig) -> Router<AppState> {
    Router::new()
        .route("/", get(serve_root))
        .nest_service("/static", ServeDir::new(&dirs.static_root))
}

/// Returned on `/` when no web client has been deployed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApiDescriptor {
    pub message: String,
    pub docs: String,
}

impl Default for ApiDescriptor {
    fn default() -> Self {
        Self {
            message: format!("{} API", crate::SERVICE_NAME),
            docs: "/docs".to_string(),
        }
    }
}

/// Serve `index.html` from the static root if present, otherwise describe where the API docs live.
#[tracing::instrument(skip_all)]
pub async fn serve_root(state: State<AppState>, request: Request) -> Response {
    let index = state.config.dirs.index_file();
    let has_index = tokio::fs::metadata(&index).await.is_ok_and(|meta| meta.is_file());

    if !has_index {
        tracing::trace!(?index, "No index file, returning API descriptor");
        return Json(ApiDescriptor::default()).into_response();
    }

    match ServeFile::new(index).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
