use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    decompression::RequestDecompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use crate::{
    cli_args::CliArgs,
    error::ErrorVerbosity,
    middleware::trace_response_body::trace_response_body,
    route::{self, base::app::welcome},
    state::ApiState,
    store::BookStore,
};

pub const DEFAULT_PORT: u16 = 8080;

/// Parses a port, falling back to [`DEFAULT_PORT`] if `port` is empty.
pub fn parse_port(port: &str) -> anyhow::Result<u16> {
    if port.is_empty() {
        return Ok(DEFAULT_PORT);
    }

    port.parse().with_context(|| format!("Invalid port `{port}`"))
}

#[derive(Debug)]
pub struct ServerConfig {
    socket_address: SocketAddr,
    error_verbosity: ErrorVerbosity,
}

impl ServerConfig {
    pub fn new(socket_address: SocketAddr, error_verbosity: ErrorVerbosity) -> Self {
        Self {
            socket_address,
            error_verbosity,
        }
    }

    pub fn from_cli_args(args: &CliArgs) -> anyhow::Result<Self> {
        let port = parse_port(args.port.as_deref().unwrap_or_default())?;

        Ok(Self::new(
            SocketAddr::new(args.host, port),
            args.error_verbosity,
        ))
    }

    pub fn socket_address(&self) -> SocketAddr {
        self.socket_address
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            ErrorVerbosity::default(),
        )
    }
}

pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Builds the application router around the given state.
    ///
    /// Transport layers (tracing, compression) are added by [`Server::run`].
    pub fn app(state: ApiState) -> Router {
        Router::new()
            .merge(route::base::app::app())
            .merge(route::echo::app::app())
            .merge(route::books::app::app())
            .fallback(welcome)
            .layer(middleware::from_fn_with_state(
                state.clone(),
                trace_response_body,
            ))
            .with_state(state)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let state = ApiState::new(self.config.error_verbosity, BookStore::seeded());

        let app = Self::app(state).layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
                )
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new()),
        );

        tracing::info!(addr = %self.config.socket_address, "Starting server");

        let listener = TcpListener::bind(&self.config.socket_address)
            .await
            .context("Bind failed")?;

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");

        tracing::info!("CTRL+C received");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;

        tracing::info!("SIGTERM received");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn empty_port_uses_default() {
        assert_eq!(parse_port("").expect("Empty port is valid"), 8080);
    }

    #[test]
    fn numeric_port_is_used() {
        assert_eq!(parse_port("3000").expect("Port is valid"), 3000);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(parse_port("http").is_err());
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn cli_args_resolve_to_socket_address() {
        let args = CliArgs::try_parse_from([
            "server",
            "--port",
            "9000",
            "--host",
            "127.0.0.1",
            "--error-verbosity",
            "full",
        ])
        .expect("Arguments are valid");

        let config = ServerConfig::from_cli_args(&args).expect("Config is valid");

        assert_eq!(
            config.socket_address(),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 9000)
        );
        assert_eq!(config.error_verbosity, ErrorVerbosity::Full);
    }

    #[test]
    fn explicit_empty_port_binds_all_interfaces_on_default_port() {
        let args = CliArgs::try_parse_from(["server", "--port", "", "--host", "0.0.0.0"])
            .expect("Arguments are valid");

        let config = ServerConfig::from_cli_args(&args).expect("Config is valid");

        assert_eq!(config.socket_address(), ServerConfig::default().socket_address());
        assert_eq!(config.error_verbosity, ErrorVerbosity::StatusCode);
    }
}
