use tracing::Subscriber;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Create the initial subscriber, alongside the custom formatting for standard i/o.
///
/// `RUST_LOG` takes precedence over `default_directives` when set.
pub fn create_subscriber(default_directives: &str) -> impl Subscriber + Send + Sync {
    let own_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_thread_ids(true)
        .with_source_location(true);
    let dependency_format = own_format.clone().with_source_location(false);

    // Only our own crates get source locations, tower_http/reqwest noise would just get longer.
    let own_logger = tracing_subscriber::fmt::layer()
        .event_format(own_format)
        .with_filter(filter_fn(|meta| is_own_target(meta.target())))
        .with_filter(env_filter(default_directives));
    let dependency_logger = tracing_subscriber::fmt::layer()
        .event_format(dependency_format)
        .with_filter(filter_fn(|meta| !is_own_target(meta.target())))
        .with_filter(env_filter(default_directives));

    tracing_subscriber::registry().with(own_logger).with(dependency_logger)
}

fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

fn is_own_target(target: &str) -> bool {
    target.starts_with("vf_")
}
