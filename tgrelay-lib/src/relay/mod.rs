mod relay_session;
mod telegram_sender;

use async_trait::async_trait;
use tgrelay_proto::dto::UploadFileDto;

use crate::Result;

pub use relay_session::*;
pub use telegram_sender::*;

/// Delivers a single uploaded file to the relay destination.
#[async_trait]
pub trait DocumentSender: Send + Sync {
    async fn send_document(&self, file: &UploadFileDto) -> Result<()>;
}
