//! CLI command definitions for the `nsync` binary.
//!
//! Uses clap derive macros for argument parsing. `serve` runs the relay;
//! `ask` and `chat` are clients of a running relay.

pub mod ask;
pub mod chat;
pub mod check;
pub mod client;
pub mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use neurosync_types::provider::ProviderKind;

/// Proxy URL used by the client commands when `--url` is not given.
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000/api/chat";

/// Chat relay for the Neuro Sync dashboard.
#[derive(Parser)]
#[command(name = "nsync", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the TOML config file (default: $NEUROSYNC_CONFIG, then
    /// ./neurosync.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Export tracing spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP relay server.
    Serve {
        /// Address to bind (overrides [server].host).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides [server].port).
        #[arg(long, short)]
        port: Option<u16>,

        /// Provider to forward to: openai, gemini, mistral or custom.
        #[arg(long)]
        provider: Option<ProviderKind>,

        /// Model identifier sent with every request.
        #[arg(long)]
        model: Option<String>,

        /// Base URL of an OpenAI-compatible API.
        #[arg(long)]
        base_url: Option<String>,

        /// Directory of the built web app to serve as a fallback.
        #[arg(long, env = "NEUROSYNC_WEB_DIR")]
        web_dir: Option<String>,
    },

    /// Send one message to a running relay and print the reply.
    Ask {
        /// The message to send.
        message: String,

        /// Optional system prompt sent before the message.
        #[arg(long, short)]
        system: Option<String>,

        /// Relay endpoint.
        #[arg(long, default_value = DEFAULT_PROXY_URL)]
        url: String,
    },

    /// Interactive chat against a running relay.
    Chat {
        /// Relay endpoint.
        #[arg(long, default_value = DEFAULT_PROXY_URL)]
        url: String,

        /// Optional system prompt kept at the head of the conversation.
        #[arg(long, short)]
        system: Option<String>,
    },

    /// Show the effective configuration (credential masked).
    Config,

    /// Test the configured provider directly with a one-turn request.
    Check,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
