use clap::Parser;
use feedback_board::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    if let Err(err) = cli::run(args).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
