use std::sync::Arc;
use aide::axum::IntoApiResponse;
use aide::axum::routing::{get, get_with};
use aide::openapi::OpenApi;
use aide::scalar::Scalar;
use aide::transform::TransformOpenApi;
use axum::response::IntoResponse;
use axum::{Extension, Json, Router};
use vf_system::SessionProxyHandle;
use crate::api::error::{ApiError, ApiResponseError};
use crate::config::SharedConfig;

pub mod error;
pub mod assets;
pub mod health;
pub mod session;

pub type ApiRouter<S = ()> = aide::axum::ApiRouter<S>;
pub type ApiResult<T, E = ApiError> = Result<T, E>;

#[derive(Clone)]
pub struct AppState {
    pub(crate) config: SharedConfig,
    pub(crate) sessions: SessionProxyHandle,
}

/// Root config for all routes, documented API routes as well as the static host.
pub fn config(app_state: AppState) -> Router<AppState> {
    aide::r#gen::on_error(|error| {
        tracing::error!(?error, "Aide Error");
    });

    aide::r#gen::extract_schemas(true);
    let mut api = OpenApi::default();

    ApiRouter::new()
        .nest_api_service("/docs", docs_routes())
        .merge(session::config())
        .merge(health::config())
        .finish_api_with(&mut api, api_docs)
        .merge(assets::config(&app_state.config.dirs))
        .layer(Extension(Arc::new(api)))
}

pub fn docs_routes() -> ApiRouter {
    aide::r#gen::infer_responses(true);

    let router: ApiRouter = ApiRouter::new()
        .api_route(
            "/",
            get_with(
                Scalar::new("/docs/api.json")
                    .with_title("VoiceFast")
                    .axum_handler(),
                |op| op.description("This documentation page."),
            ),
        )
        .route("/api.json", get(serve_docs));

    aide::r#gen::infer_responses(false);

    router
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("VoiceFast - Realtime Voice Agent")
        .summary("Mints ephemeral realtime voice sessions for the bundled web client")
        .default_response_with::<Json<ApiResponseError>, _>(|res| {
            res.example(ApiResponseError {
                detail: "OPENAI_API_KEY environment variable not set".to_string(),
            })
        })
}
