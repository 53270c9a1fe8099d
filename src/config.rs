use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(about = "Serve the portfolio page")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to, overriding the Leptos site address
    #[arg(long, env = "FOLIO_BIND")]
    pub bind: Option<String>,
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = fmt().with_env_filter(filter).with_target(true).finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        warn!("tracing subscriber already initialized");
    }
}
