mod cmd;
mod config;
mod error;

use clap::Parser;
use config::{Effective, FeedArgs};
use error::FeedError;

#[derive(Parser)]
#[command(name = "dg-feed", about = "Recent Datagrepper activity for a package")]
struct Cli {
    #[command(flatten)]
    args: FeedArgs,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let eff = match Effective::new(&cli.args) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = cmd::feed::run(&eff).await {
        match &e {
            // already reads "Error: ..."
            FeedError::Connector(c) if c.is_unavailable() => eprintln!("{e}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}
