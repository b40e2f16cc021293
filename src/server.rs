use anyhow::{Context, Result};
use axum::Router;
use clap::{Parser, ValueEnum};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app::{App, shell};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "trivia-web", version, about = "Serve the trivia front-end")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to, overrides the Leptos site address
    #[arg(long, env = "SITE_ADDR")]
    pub site_addr: Option<String>,
    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

pub fn init_logging(format: LogFormat) -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = match format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(false)
            .with_target(false)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_target(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

/// Resolve the address to listen on: the CLI override wins over the
/// `site-addr` from the Leptos configuration.
pub fn resolve_site_addr(config: &ServerConfig, options: &mut LeptosOptions) -> Result<()> {
    if let Some(addr) = &config.site_addr {
        options.site_addr = addr
            .parse()
            .with_context(|| format!("invalid site address {addr:?}"))?;
    }
    Ok(())
}

pub fn router(leptos_options: LeptosOptions) -> Router {
    let shell_options = leptos_options.clone();
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, move || {
            let val = shell_options.clone();
            move || shell(val.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new().gzip(true).zstd(true))
        .with_state(leptos_options)
}
