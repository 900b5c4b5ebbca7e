use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};

mod config;
mod export;
mod server;

use crate::config::SiteConfig;

#[derive(Parser, Debug)]
#[command(name = "site")]
#[command(about = "Build and preview the personal site")]
#[command(version)]
struct Cli {
    /// Site configuration file
    #[arg(long, global = true, env = "SITE_CONFIG", default_value = "site.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pre-render every page into the export directory
    Build {
        /// Overrides `out_dir` from the config
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serve the export (or render on request when not exporting)
    Serve {
        #[arg(long, env = "SITE_ADDR", default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = SiteConfig::load_or_default(&cli.config)?;

    if config.strict_mode {
        for warning in config.strict_warnings() {
            log::warn!("{warning}");
        }
    }

    match cli.command {
        Command::Build { out } => {
            let out = out.unwrap_or_else(|| config.out_dir.clone());
            let report = export::export(&config, &out, current_year())?;
            log::info!(
                "exported {} pages and {} assets to {}",
                report.pages.len(),
                report.assets,
                out.display()
            );
        }
        Command::Serve { addr } => {
            server::serve(config, &addr, current_year())
                .await
                .with_context(|| format!("serving on {addr}"))?;
        }
    }

    Ok(())
}
