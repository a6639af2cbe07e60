use anyhow::Context;
use clap::Parser;
use desk_config::DeskConfig;
use desk_db::{IncidentDb, IncidentStore};
use desk_server::{AppState, build_router, serve};

mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("desk error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let mut config = DeskConfig::load_with_dotenv().context("failed to load configuration")?;
    init_tracing(&config.logging.filter, cli.quiet, cli.verbose)?;

    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    let addr = config.server.socket_addr()?;

    let db = if let Some(path) = cli.local.as_deref() {
        tracing::warn!(path, "using local database; remote settings ignored");
        IncidentDb::open_local(path)
            .await
            .with_context(|| format!("failed to open local database at {path}"))?
    } else {
        config.turso.require()?;
        IncidentDb::open_remote(&config.turso.url, &config.turso.auth_token)
            .await
            .context("failed to connect to the incident database")?
    };

    let state = AppState::new(IncidentStore::new(db));
    let router = build_router(state, config.server.cors_permissive);
    serve(router, addr).await.context("server error")
}

fn init_tracing(configured: &str, quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DESK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
