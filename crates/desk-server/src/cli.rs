use clap::Parser;

/// Command-line flags for the `desk` binary. Flags override the loaded
/// configuration.
#[derive(Debug, Parser)]
#[command(name = "desk", version, about = "Desk - incident tracking service")]
pub struct Cli {
    /// Interface to bind (overrides `server.bind`)
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on (overrides `server.port`)
    #[arg(long)]
    pub port: Option<u16>,

    /// Use a local libSQL file instead of the remote database (development only)
    #[arg(long, value_name = "PATH")]
    pub local: Option<String>,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}
