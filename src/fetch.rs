//! Orchestrates the imagery fetches: query an API for picture URLs, then
//! hand them to the downloader with a per-source filename prefix.

use std::path::Path;

use reqwest::Client;

use crate::config::Settings;
use crate::download;
use crate::errors::AppResult;
use crate::{nasa, spacex};

/// Default directory shared by the fetchers and the uploader loop.
pub const DEFAULT_PICTURES_DIR: &str = "pictures";
pub const DEFAULT_APOD_COUNT: u32 = 10;

pub async fn fetch_spacex(
    client: &Client,
    settings: &Settings,
    dir: &Path,
    launch_id: Option<&str>,
) -> AppResult<usize> {
    let launch_id = match launch_id {
        Some(id) => id.to_string(),
        None => settings.spacex_launch_id()?.to_string(),
    };
    let urls = spacex::launch_photo_urls(client, &launch_id).await?;
    log::info!(
        "Launch {} has {} flickr originals",
        launch_id,
        urls.len()
    );
    download::download_pictures(client, &urls, dir, "spacex").await
}

pub async fn fetch_apod(
    client: &Client,
    settings: &Settings,
    dir: &Path,
    count: u32,
) -> AppResult<usize> {
    let urls = nasa::apod_picture_urls(client, settings.nasa_api_key()?, count).await?;
    download::download_pictures(client, &urls, dir, "nasa_apod").await
}

pub async fn fetch_epic(client: &Client, settings: &Settings, dir: &Path) -> AppResult<usize> {
    let urls = nasa::epic_picture_urls(client, settings.nasa_api_key()?).await?;
    download::download_pictures(client, &urls, dir, "nasa_epic").await
}

/// The three fetches in sequence; a failure in one aborts the rest.
pub async fn fetch_all(client: &Client, settings: &Settings, dir: &Path) -> AppResult<usize> {
    let mut saved = fetch_spacex(client, settings, dir, None).await?;
    saved += fetch_epic(client, settings, dir).await?;
    saved += fetch_apod(client, settings, dir, DEFAULT_APOD_COUNT).await?;
    Ok(saved)
}
