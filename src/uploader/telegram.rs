use std::path::Path;

use async_trait::async_trait;
use reqwest::{multipart, Client};
use serde::Deserialize;
use tokio::time::Duration;

use super::DocumentSender;
use crate::errors::{AppError, AppResult};

pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Telegram Bot API client. Holds only the HTTP client and the bot token;
/// the file handle and multipart form for a send are built per attempt and
/// dropped when the attempt finishes, so nothing stays open across the long
/// interval waits.
pub struct TelegramClient {
    client: Client,
    token: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(token: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap(),
            token: token.to_string(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", TELEGRAM_API_URL, self.token, method)
    }
}

#[async_trait]
impl DocumentSender for TelegramClient {
    async fn send_document(&self, chat_id: &str, path: &Path) -> AppResult<()> {
        let contents = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let part = multipart::Part::bytes(contents)
            .file_name(filename)
            .mime_str(mime_type_for(path))?;
        let form = multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .part("document", part);

        let response = self
            .client
            .post(self.method_url("sendDocument"))
            .multipart(form)
            .send()
            .await?;
        let status = response.status();

        // Gateway-level failures (502 from the Bot API front end) come back
        // as HTML, not the usual JSON envelope. Treat them like any other
        // transient network trouble.
        if status.is_server_error() {
            return Err(AppError::upload_failed(format!(
                "Telegram API returned {} for sendDocument",
                status
            )));
        }

        let body = response.text().await?;
        let api: ApiResponse = serde_json::from_str(&body)?;
        if !api.ok {
            return Err(AppError::Telegram {
                description: api
                    .description
                    .unwrap_or_else(|| format!("HTTP {}", status)),
            });
        }
        Ok(())
    }
}

fn mime_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
