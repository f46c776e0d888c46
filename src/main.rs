use clap::Parser;
use taskdeck::cli::{self, commands::Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::run(cli).await {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}
