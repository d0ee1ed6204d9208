use clap::{Parser, Subcommand};

/// `Virtum` - demo health-tracking API with a rule-based chat assistant.
#[derive(Parser, Debug)]
#[command(name = "virtum")]
#[command(version)]
#[command(about = "Demo health-tracking API with a rule-based chat assistant.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API (auth, metrics, chat)
    Serve {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Ask the chat assistant about a live metrics snapshot
    Chat {
        /// Single message mode (don't enter interactive mode)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Print one metrics snapshot as JSON
    Metrics,

    /// Show the effective configuration
    Status,
}
