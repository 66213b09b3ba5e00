//! wikiquiz - generate quizzes from Wikipedia articles in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use wikiquiz_api::HttpQuizClient;
use wikiquiz_app::config;

/// Generate multiple-choice quizzes from Wikipedia articles
#[derive(Parser, Debug)]
#[command(name = "wikiquiz")]
#[command(about = "Generate quizzes from Wikipedia articles", long_about = None)]
struct Args {
    /// Quiz service base URL (overrides config file and WIKIQUIZ_API_BASE_URL)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .or_else(config::default_config_path)
            .ok_or_else(|| color_eyre::eyre::eyre!("No config directory on this platform"))?;
        let created = config::init_config_file(&path)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        if created {
            println!("Wrote default config to {}", path.display());
        } else {
            println!("Config already exists at {}, left unchanged", path.display());
        }
        return Ok(());
    }

    wikiquiz_core::logging::init().wrap_err("Failed to initialise logging")?;

    let settings = config::resolve_settings(args.config.as_deref(), args.api_base);
    let client = HttpQuizClient::new(&settings.api.base_url, settings.api.timeout())?;

    wikiquiz_tui::run(&settings, client).await?;
    Ok(())
}
