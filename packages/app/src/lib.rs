#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod page;
pub mod routes;
pub mod state;

use actix_web::{App, HttpServer, middleware, web};
use linereview_app_ui::{InvalidOriginError, Origin};
use state::AppState;
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("Invalid ORIGIN: {0}")]
    InvalidOrigin(#[from] InvalidOriginError),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin used to build absolute "Copy link" URLs. Defaults to the bind
    /// address.
    pub origin: Option<Origin>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            origin: None,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub const fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            origin: None,
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: String) -> Self {
        self.host = host;
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Option<Origin>) -> Self {
        self.origin = origin;
        self
    }

    /// Reads `HOST`, `PORT` and `ORIGIN`, falling back to defaults for unset
    /// variables.
    ///
    /// # Errors
    ///
    /// * If `PORT` is not a valid port number
    /// * If `ORIGIN` is not a valid `http`/`https` origin
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    ///
    /// # Errors
    ///
    /// * If `PORT` is not a valid port number
    /// * If `ORIGIN` is not a valid `http`/`https` origin
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort {
                    value: port.clone(),
                    source,
                })?;
        }
        if let Some(origin) = lookup("ORIGIN") {
            config.origin = Some(Origin::parse(&origin)?);
        }

        Ok(config)
    }

    /// The configured origin, or one derived from the bind address.
    ///
    /// # Errors
    ///
    /// * If no origin is configured and the host does not form a valid origin
    pub fn resolve_origin(&self) -> Result<Origin, InvalidOriginError> {
        self.origin.as_ref().map_or_else(
            || Origin::parse(&format!("http://{}:{}", self.host, self.port)),
            |origin| Ok(origin.clone()),
        )
    }
}

/// Registers every route. Shared by the server and the route tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/comment-box",
        web::post().to(routes::render_comment_box),
    )
    .route("/preview", web::get().to(routes::preview))
    .route("/health", web::get().to(|| async { "OK" }));
}

/// # Errors
///
/// Returns an error if the origin is invalid, or the server fails to bind or
/// run
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let RunServerResponse { join_handle, .. } = run_server_with_handle(&config)?;

    join_handle.await?
}

pub struct RunServerResponse {
    pub handle: actix_web::dev::ServerHandle,
    pub addrs: Vec<std::net::SocketAddr>,
    pub join_handle: JoinHandle<Result<(), std::io::Error>>,
}

/// # Errors
///
/// Returns an error if the origin is invalid or the server fails to bind
pub fn run_server_with_handle(config: &ServerConfig) -> std::io::Result<RunServerResponse> {
    let origin = config
        .resolve_origin()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!(
        "Starting linereview on {}:{} (origin {origin})",
        config.host,
        config.port
    );

    let state = web::Data::new(AppState::new(origin));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?;

    let addrs = server.addrs();
    let server = server.run();
    let handle = server.handle();

    let join_handle = tokio::spawn(server);

    Ok(RunServerResponse {
        handle,
        addrs,
        join_handle,
    })
}
