// Uploader module - periodically posts a random local file to a Telegram chat

pub mod driver;
pub mod telegram;

use std::path::Path;

use async_trait::async_trait;

use crate::errors::AppResult;

pub use driver::{run, LoopConfig};
pub use telegram::TelegramClient;

/// Seam between the loop driver and the messaging backend. Implementations
/// must not hold network resources across calls; everything needed for one
/// send is acquired inside `send_document` and released before it returns.
#[async_trait]
pub trait DocumentSender {
    async fn send_document(&self, chat_id: &str, path: &Path) -> AppResult<()>;
}
