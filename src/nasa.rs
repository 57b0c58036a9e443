use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};

pub const APOD_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const EPIC_INFO_URL: &str = "https://api.nasa.gov/EPIC/api/natural/images";
pub const EPIC_ARCHIVE_URL: &str = "https://api.nasa.gov/EPIC/archive/natural";

/// Image format requested from the EPIC archive.
pub const EPIC_IMAGE_FORMAT: &str = "png";

#[derive(Debug, Deserialize)]
struct ApodEntry {
    /// Absent or null for non-image entries, which the caller skips.
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EpicImage {
    image: String,
    /// Capture timestamp, `YYYY-MM-DD HH:MM:SS`.
    date: String,
}

/// Fetches `count` random Astronomy Picture of the Day entries and returns
/// their media URLs. Video entries surface here too; the downloader drops
/// them by extension.
pub async fn apod_picture_urls(
    client: &Client,
    api_key: &str,
    count: u32,
) -> AppResult<Vec<String>> {
    let count = count.to_string();
    let response = client
        .get(APOD_URL)
        .query(&[("api_key", api_key), ("count", count.as_str())])
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::api(status.as_u16(), APOD_URL));
    }
    let body = response.text().await?;
    parse_apod_urls(&body)
}

/// Fetches metadata for the latest natural-color EPIC image set and builds
/// the archive download URL for each image.
pub async fn epic_picture_urls(client: &Client, api_key: &str) -> AppResult<Vec<String>> {
    let response = client
        .get(EPIC_INFO_URL)
        .query(&[("api_key", api_key)])
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::api(status.as_u16(), EPIC_INFO_URL));
    }
    let body = response.text().await?;
    parse_epic_urls(&body, api_key)
}

fn parse_apod_urls(body: &str) -> AppResult<Vec<String>> {
    let entries: Vec<ApodEntry> = serde_json::from_str(body)?;
    Ok(entries.into_iter().filter_map(|entry| entry.url).collect())
}

fn parse_epic_urls(body: &str, api_key: &str) -> AppResult<Vec<String>> {
    let images: Vec<EpicImage> = serde_json::from_str(body)?;
    images
        .iter()
        .map(|image| epic_archive_url(image, api_key))
        .collect()
}

/// The archive path embeds the capture date as `YYYY/MM/DD`. EPIC archive
/// downloads authenticate through a query parameter rather than a header.
fn epic_archive_url(image: &EpicImage, api_key: &str) -> AppResult<String> {
    let taken = NaiveDateTime::parse_from_str(&image.date, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| AppError::InvalidResponse(format!("bad EPIC date {:?}: {}", image.date, e)))?;
    Ok(format!(
        "{}/{}/{}/{}.{}?api_key={}",
        EPIC_ARCHIVE_URL,
        taken.format("%Y/%m/%d"),
        EPIC_IMAGE_FORMAT,
        image.image,
        EPIC_IMAGE_FORMAT,
        api_key
    ))
}
