use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use url::Url;

use crate::clipboard;
use crate::resolve::Resolver;
use crate::services::Service;

/// Songwhip link resolver.
#[derive(Parser)]
#[command(version, about, long_about=None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn execute(self) -> anyhow::Result<()> {
        self.command.execute().await
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the services a deep link can be resolved for
    Services,
    /// Resolve a track URL to a shareable link and copy it to the clipboard
    Get {
        /// URL to a track on any supported streaming platform
        track: Url,

        /// Resolve this service's deep link instead of the Songwhip page
        #[arg(short = 's', value_name = "SERVICE")]
        service: Option<String>,
    },
}

impl Commands {
    async fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Services => {
                for service in Service::ALL {
                    println!("{}", service.to_string().bright_yellow());
                }
                Ok(())
            }
            Commands::Get { track, service } => {
                let label = service.as_deref().unwrap_or("Songwhip");
                println!(
                    "{}",
                    format!("Getting {label} link for {track}").bright_yellow()
                );

                let bar = indicatif::ProgressBar::new_spinner();
                bar.enable_steady_tick(Duration::from_millis(100));
                bar.set_message(format!("Resolving {track}"));

                let resolver = Resolver::new();
                let link = resolver.resolve(track, service.as_deref()).await?;
                bar.finish_and_clear();

                clipboard::copy(&link)?;
                println!(
                    "{}",
                    format!("Copied {label} link {link} to clipboard!").green()
                );
                Ok(())
            }
        }
    }
}
