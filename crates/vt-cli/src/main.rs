//! # vt CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Veritrade toolchain.
///
/// Decodes recorded web-proof payloads, replays offline ownership
/// verification, inspects provider registries, and serves the API.
#[derive(Parser, Debug)]
#[command(name = "vt", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Decode and extract a recorded proof payload.
    Decode(vt_cli::decode::DecodeArgs),
    /// Replay a payload through the full session and matcher.
    Verify(vt_cli::verify::VerifyArgs),
    /// Inspect a provider registry file.
    Providers(vt_cli::providers::ProvidersArgs),
    /// Run the HTTP API.
    Serve(vt_cli::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(args) => vt_cli::decode::run(args),
        Commands::Verify(args) => vt_cli::verify::run(args).await,
        Commands::Providers(args) => vt_cli::providers::run(args),
        Commands::Serve(args) => vt_cli::serve::run(args).await,
    }
}
