//! Neuro Sync relay CLI and HTTP server entry point.
//!
//! Binary name: `nsync`
//!
//! Parses CLI arguments, initializes tracing, loads `neurosync.toml`, then
//! dispatches to a client command or starts the relay server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use neurosync_infra::config::{load_relay_config, resolve_config_path};
use neurosync_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "nsync", &mut std::io::stdout());
        return Ok(());
    }

    // Client commands only talk to a running relay
    match &cli.command {
        Commands::Ask { message, system, url } => {
            return cli::ask::ask(url, message, system.as_deref(), cli.json).await;
        }
        Commands::Chat { url, system } => {
            return cli::chat::loop_runner::run_chat_loop(url, system.as_deref()).await;
        }
        _ => {}
    }

    let config_path = resolve_config_path(cli.config.as_deref());
    let mut config = load_relay_config(&config_path).await?;

    match cli.command {
        Commands::Config => {
            cli::config::show_config(&config_path, &config, cli.json).await?;
        }

        Commands::Check => {
            let state = AppState::new(config.provider.resolve()?)?;
            cli::check::check(&state, cli.json).await?;
        }

        Commands::Serve {
            host,
            port,
            provider,
            model,
            base_url,
            web_dir,
        } => {
            if let Some(kind) = provider {
                config.provider.kind = kind;
            }
            if model.is_some() {
                config.provider.model = model;
            }
            if base_url.is_some() {
                config.provider.base_url = base_url;
            }
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let web_dir = web_dir.unwrap_or(config.server.web_dir);

            let state = AppState::new(config.provider.resolve()?)?;
            if !state.relay.credential_configured().await {
                tracing::warn!(
                    env = %state.relay.api_key_env(),
                    "No provider credential set; chat requests will fail until it is"
                );
            }

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} Neuro Sync relay listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!(
                    "  {} {} ({})",
                    console::style("Provider:").dim(),
                    state.provider.kind,
                    state.relay.model()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state, &web_dir);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Ask { .. } | Commands::Chat { .. } | Commands::Completions { .. } => {
            unreachable!("handled above")
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
