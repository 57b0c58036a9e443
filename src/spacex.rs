use reqwest::Client;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};

pub const LAUNCHES_URL: &str = "https://api.spacexdata.com/v5/launches";

#[derive(Debug, Deserialize)]
struct Launch {
    links: Links,
}

#[derive(Debug, Deserialize)]
struct Links {
    #[serde(default)]
    flickr: Flickr,
}

#[derive(Debug, Default, Deserialize)]
struct Flickr {
    #[serde(default)]
    original: Vec<String>,
}

/// Returns the full-resolution flickr photo URLs for one launch. Launches
/// without photos yield an empty list, which is not an error.
pub async fn launch_photo_urls(client: &Client, launch_id: &str) -> AppResult<Vec<String>> {
    let url = format!("{}/{}", LAUNCHES_URL, launch_id);
    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::api(status.as_u16(), &url));
    }
    let body = response.text().await?;
    parse_launch_photo_urls(&body)
}

fn parse_launch_photo_urls(body: &str) -> AppResult<Vec<String>> {
    let launch: Launch = serde_json::from_str(body)?;
    Ok(launch.links.flickr.original)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_flickr_originals() {
        let body = r#"{
            "name": "CRS-20",
            "links": {
                "patch": {"small": "https://images2.imgbox.com/53/22/dh0XSLXO_o.png"},
                "flickr": {
                    "small": [],
                    "original": [
                        "https://live.staticflickr.com/65535/49635401403_96d1e8e7ee_o.jpg",
                        "https://live.staticflickr.com/65535/49636202657_e81210a3ca_o.jpg"
                    ]
                }
            }
        }"#;
        let urls = parse_launch_photo_urls(body).unwrap();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].ends_with("_o.jpg"));
    }

    #[test]
    fn launch_without_photos_yields_empty_list() {
        let body = r#"{"name": "FalconSat", "links": {}}"#;
        assert!(parse_launch_photo_urls(body).unwrap().is_empty());
    }

    #[test]
    fn malformed_body_is_a_json_error() {
        assert!(matches!(
            parse_launch_photo_urls("[]"),
            Err(AppError::Json(_))
        ));
    }
}
