use std::sync::Arc;
use std::time::Duration;
use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::{BoxError, Json, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use vf_system::{SessionProxy, SessionProxyHandle};

use crate::api::error::ApiResponseError;
use crate::api::AppState;
use crate::config::{Config, SharedConfig};

mod static_root;

pub use static_root::prepare_static_root;

pub struct Application {
    pub tcp: TcpListener,
    pub config: SharedConfig,
    pub sessions: SessionProxyHandle,
}

impl Application {
    #[tracing::instrument(name = "Create application", skip(config), fields(addr = config.app.host, port = config.app.port))]
    pub async fn new(config: Config) -> eyre::Result<Self> {
        let tcp = TcpListener::bind(config.app.bind_address()).await?;

        prepare_static_root(&config.dirs).await;

        let sessions = Arc::new(SessionProxy::with_reqwest(config.realtime.clone())?);
        if config.realtime.api_key.is_none() {
            tracing::warn!("No upstream API key configured, session requests will fail until one is provided");
        }

        let result = Application {
            tcp,
            config: Arc::new(config),
            sessions,
        };

        Ok(result)
    }

    /// Start running the Axum server, consuming `Application`.
    /// The future completes when the Tokio-Runtime has been shut down (due to f.e a SIGINT).
    ///
    /// # Arguments
    ///
    /// * `quitter` - A way to inform the spawned runtime to shut down. Especially useful for tests
    /// where we won't provide a signal for shutdown.
    pub async fn run(self, quitter: Arc<tokio::sync::Notify>) -> eyre::Result<()> {
        tracing::info!("Setup complete, starting server...");

        let app = construct_server(self.config.clone(), self.sessions.clone());

        tracing::info!("Listening on {:?}", self.tcp.local_addr()?);

        let server = axum::serve(self.tcp, app.into_make_service());

        tokio::select! {
            _ = quitter.notified() => Ok(()),
            res = tokio::signal::ctrl_c() => {
                tracing::trace!("Received CTRL-C notification, exiting...");
                quitter.notify_waiters();
                res.map_err(|e| eyre::eyre!(e))
            },
            res = server => res.map_err(|e| eyre::eyre!(e))
        }
    }
}

/// Build the complete router, with all middleware applied.
pub fn construct_server(config: SharedConfig, sessions: SessionProxyHandle) -> Router {
    let state = AppState { config, sessions };

    let app_layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new().br(true).gzip(true).deflate(true))
        // The browser client may be served from anywhere during development.
        .layer(CorsLayer::very_permissive());

    let app = api_router(state.clone())
        .layer(app_layers)
        .with_state(state);

    apply_security_middleware(app)
}

fn api_router(app_state: AppState) -> Router<AppState> {
    crate::api::config(app_state)
}

fn apply_security_middleware(router: Router) -> Router {
    let security = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(generic_error_handler))
        .load_shed()
        .concurrency_limit(512)
        .layer(tower_http::timeout::TimeoutLayer::new(Duration::from_secs(60)));

    router.layer(security)
}

async fn generic_error_handler(error: BoxError) -> impl axum::response::IntoResponse {
    let (status, detail) = if error.is::<tower::load_shed::error::Overloaded>() {
        (StatusCode::SERVICE_UNAVAILABLE, "Server is overloaded, try again later")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error")
    };
    tracing::warn!(?error, %status, "Error occurred in middleware");

    (status, Json(ApiResponseError { detail: detail.to_string() }))
}
