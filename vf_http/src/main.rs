use tracing_subscriber::util::SubscriberInitExt;
use vf_http::setup::Application;
use vf_http::{get_quit_notifier, telemetry};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // We don't care if it can't find a .env file
    let _ = dotenv::dotenv();

    color_eyre::install()?;

    // Setup Tracing
    let subscriber = telemetry::create_subscriber(
        "WARN,reqwest=DEBUG,vf_system=TRACE,vf_http=TRACE,tower_http=DEBUG,hyper=WARN",
    );
    subscriber.init();

    // Setup server
    let config = vf_http::config::initialise_config()?;
    let app = Application::new(config).await?;

    let notifier = get_quit_notifier();

    app.run(notifier).await?;

    Ok(())
}
