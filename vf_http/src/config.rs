use std::path::PathBuf;
use std::sync::Arc;
use serde::Deserialize;
use tokio::net::ToSocketAddrs;
use vf_system::realtime::config::{ApiKey, RealtimeConfig, API_KEY_VARIABLE};

pub type SharedConfig = Arc<Config>;

static CONFIG_FILE: &str = "config.toml";
static ENV_PREFIX: &str = "voicefast";

/// Initialise the config.
///
/// Loads the optional config file from the config directory, after which `VOICEFAST_*` environment variables
/// and finally the upstream API key variable are applied on top.
/// Nothing is ever written to disk, a missing config file simply means defaults.
pub fn initialise_config() -> eyre::Result<Config> {
    let mut builder = config::Config::builder();

    if let Some(c_path) = get_full_config_path() {
        builder = builder.add_source(config::File::with_name(&c_path.to_string_lossy()).required(false));
    }

    let c = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config: Config = c.try_deserialize()?;
    config.apply_api_key(std::env::var(API_KEY_VARIABLE).ok());

    Ok(config)
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    /// Bindings and host address
    pub app: ServerConfig,
    /// All directory related configs
    pub dirs: DirectoryConfig,
    /// Upstream realtime session settings, including the API key.
    pub realtime: RealtimeConfig,
}

impl Config {
    /// Use the given key for upstream authentication, if it's present and non-empty.
    ///
    /// Takes precedence over any key from the config file.
    pub fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.is_empty()) {
            self.realtime.api_key = Some(ApiKey::new(key));
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Directory whose contents are served under `/static`.
    ///
    /// Relative paths resolve against the working directory, the default being `./static`.
    pub static_root: PathBuf,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Turn the app config settings into a [ToSocketAddrs]
    pub fn bind_address(&self) -> impl ToSocketAddrs {
        (self.host.clone(), self.port)
    }
}

impl DirectoryConfig {
    pub fn index_file(&self) -> PathBuf {
        self.static_root.join("index.html")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            static_root: PathBuf::from("static"),
        }
    }
}

/// Retrieve the *full* path to the config file.
///
/// This is just [get_config_directory] + [CONFIG_FILE]
pub fn get_full_config_path() -> Option<PathBuf> {
    get_config_directory().map(|dir| dir.join(CONFIG_FILE))
}

/// Retrieve the directory which will be used to locate the config file.
pub fn get_config_directory() -> Option<PathBuf> {
    crate::get_app_dirs().map(|dirs| dirs.config_dir)
}
