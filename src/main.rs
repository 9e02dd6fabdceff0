use clap::Parser;

use freezr_lib::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = freezr_lib::run(cli).await {
        tracing::error!(error = %err, "freezr failed");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
