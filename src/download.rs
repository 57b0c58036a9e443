use std::path::Path;

use reqwest::Client;
use url::Url;

use crate::errors::{AppError, AppResult};

/// Derives a lowercase file extension from a URL's path component, ignoring
/// query parameters. Returns `None` for URLs without a recognizable
/// extension (e.g. APOD video entries) so callers can skip them.
pub fn file_extension_from_url(raw_url: &str) -> Option<String> {
    let url = Url::parse(raw_url).ok()?;
    let extension = Path::new(url.path()).extension()?.to_str()?;
    if extension.is_empty() {
        None
    } else {
        Some(extension.to_ascii_lowercase())
    }
}

/// Downloads each URL into `dir` as `{prefix}_{index}.{ext}`, creating the
/// directory if needed. URLs lacking an extension are skipped, not errors.
/// Returns the number of files written.
pub async fn download_pictures(
    client: &Client,
    picture_urls: &[String],
    dir: &Path,
    prefix: &str,
) -> AppResult<usize> {
    tokio::fs::create_dir_all(dir).await?;

    let mut saved = 0;
    for (index, picture_url) in picture_urls.iter().enumerate() {
        let Some(extension) = file_extension_from_url(picture_url) else {
            log::debug!("Skipping {} (no file extension)", picture_url);
            continue;
        };

        let response = client.get(picture_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api(status.as_u16(), picture_url));
        }
        let bytes = response.bytes().await?;

        let destination = dir.join(format!("{}_{}.{}", prefix, index, extension));
        tokio::fs::write(&destination, &bytes).await?;
        log::info!("Saved {}", destination.display());
        saved += 1;
    }
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_extension_from_plain_url() {
        assert_eq!(
            file_extension_from_url("https://example.com/photos/image.jpg"),
            Some("jpg".to_string())
        );
    }

    #[test]
    fn ignores_query_parameters() {
        assert_eq!(
            file_extension_from_url(
                "https://api.nasa.gov/EPIC/archive/natural/2023/05/30/png/epic_1b.png?api_key=DEMO_KEY"
            ),
            Some("png".to_string())
        );
    }

    #[test]
    fn lowercases_extension() {
        assert_eq!(
            file_extension_from_url("https://example.com/SHOT.JPG"),
            Some("jpg".to_string())
        );
    }

    #[test]
    fn no_extension_yields_none() {
        assert_eq!(
            file_extension_from_url("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            None
        );
        assert_eq!(file_extension_from_url("https://example.com/"), None);
    }

    #[test]
    fn unparseable_url_yields_none() {
        assert_eq!(file_extension_from_url("not a url"), None);
    }
}
