use clap::Parser;
use colored::Colorize;
use whip::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.execute().await {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
