use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::Client;
use tokio::sync::watch;
use tokio::time::Duration;

use space_photos_bot::config::Settings;
use space_photos_bot::fetch::{self, DEFAULT_APOD_COUNT, DEFAULT_PICTURES_DIR};
use space_photos_bot::uploader::driver::{self, LoopConfig, DEFAULT_INTERVAL_SECS};
use space_photos_bot::uploader::TelegramClient;

#[derive(Parser)]
#[command(
    name = "space-photos-bot",
    about = "Downloads NASA and SpaceX photos and posts them to a Telegram channel",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download the full-resolution flickr photos of a SpaceX launch
    FetchSpacex {
        /// Launch id; falls back to the SPACEX_LAUNCH_ID environment variable
        #[arg(long)]
        launch_id: Option<String>,
        #[arg(long, default_value = DEFAULT_PICTURES_DIR)]
        dir: PathBuf,
    },
    /// Download random Astronomy Picture of the Day entries
    FetchApod {
        #[arg(long, default_value_t = DEFAULT_APOD_COUNT)]
        count: u32,
        #[arg(long, default_value = DEFAULT_PICTURES_DIR)]
        dir: PathBuf,
    },
    /// Download the latest EPIC natural-color Earth image set
    FetchEpic {
        #[arg(long, default_value = DEFAULT_PICTURES_DIR)]
        dir: PathBuf,
    },
    /// Run all three fetches in sequence
    FetchAll {
        #[arg(long, default_value = DEFAULT_PICTURES_DIR)]
        dir: PathBuf,
    },
    /// Periodically send a random downloaded file to the Telegram chat
    Upload {
        /// Seconds to wait between sends
        #[arg(short = 's', long, default_value_t = DEFAULT_INTERVAL_SECS)]
        interval_secs: u64,
        /// Send exactly this file once and exit
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(long, default_value = DEFAULT_PICTURES_DIR)]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings = Settings::from_env();
    let cli = Cli::parse();
    let client = Client::new();

    match cli.command {
        Command::FetchSpacex { launch_id, dir } => {
            let saved =
                fetch::fetch_spacex(&client, &settings, &dir, launch_id.as_deref()).await?;
            log::info!("Saved {} SpaceX photos to {}", saved, dir.display());
        }
        Command::FetchApod { count, dir } => {
            let saved = fetch::fetch_apod(&client, &settings, &dir, count).await?;
            log::info!("Saved {} APOD photos to {}", saved, dir.display());
        }
        Command::FetchEpic { dir } => {
            let saved = fetch::fetch_epic(&client, &settings, &dir).await?;
            log::info!("Saved {} EPIC photos to {}", saved, dir.display());
        }
        Command::FetchAll { dir } => {
            let saved = fetch::fetch_all(&client, &settings, &dir).await?;
            log::info!("Saved {} photos to {}", saved, dir.display());
        }
        Command::Upload {
            interval_secs,
            file,
            dir,
        } => {
            let sender = TelegramClient::new(settings.bot_token()?);
            let config = LoopConfig {
                root: dir,
                chat_id: settings.chat_id()?.to_string(),
                interval: Duration::from_secs(interval_secs),
                file,
            };

            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    log::info!("Ctrl-C received, finishing up");
                    let _ = shutdown_tx.send(true);
                }
            });

            driver::run(&sender, &config, shutdown_rx).await?;
        }
    }

    Ok(())
}
