use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use tgrelay_proto::{
    dto::{SendDocumentResponseDto, UploadFileDto},
    BotRoute, CAPTION_FIELD, CHAT_ID_FIELD, DOCUMENT_FIELD,
};
use thiserror::Error;

use crate::{Result, Settings};

use super::DocumentSender;

static CLIENT: Lazy<Client> = Lazy::new(|| {
    reqwest::ClientBuilder::new()
        .build()
        .expect("Failed to create reqwest client")
});

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Request failed: {0}")]
    Transport(reqwest::Error),
    #[error("Unexpected response status code: {0} ({1:?})")]
    Status(StatusCode, Option<String>),
    #[error("Rejected by bot api: {description:?} (error code {error_code:?})")]
    Rejected {
        error_code: Option<i64>,
        description: Option<String>,
    },
    #[error("Malformed response: {0}")]
    MalformedResponse(serde_json::Error),
}

impl From<reqwest::Error> for RelayError {
    // request errors carry the url, which embeds the bot token
    fn from(e: reqwest::Error) -> Self {
        RelayError::Transport(e.without_url())
    }
}

pub struct TelegramSender {
    api_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramSender {
    pub fn new(settings: &Settings) -> Self {
        Self {
            api_url: settings.api_url.clone(),
            bot_token: settings.bot_token.clone(),
            chat_id: settings.chat_id.clone(),
        }
    }

    fn form(&self, file: &UploadFileDto) -> std::result::Result<Form, RelayError> {
        let document = Part::bytes(file.data.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        Ok(Form::new()
            .text(CHAT_ID_FIELD, self.chat_id.clone())
            .text(CAPTION_FIELD, file.caption())
            .part(DOCUMENT_FIELD, document))
    }

    async fn post(&self, file: &UploadFileDto) -> std::result::Result<(), RelayError> {
        let url = BotRoute::SendDocument.target(&self.api_url, &self.bot_token);
        let response = CLIENT.post(url).multipart(self.form(file)?).send().await?;

        let status = response.status();
        let body = response.bytes().await?;
        let dto = serde_json::from_slice::<SendDocumentResponseDto>(&body);
        match (status, dto) {
            // 200
            (StatusCode::OK, Ok(dto)) if dto.ok => Ok(()),
            (StatusCode::OK, Ok(dto)) => Err(RelayError::Rejected {
                error_code: dto.error_code,
                description: dto.description,
            }),
            (StatusCode::OK, Err(e)) => Err(RelayError::MalformedResponse(e)),
            (status, dto) => Err(RelayError::Status(
                status,
                dto.ok().and_then(|dto| dto.description),
            )),
        }
    }
}

#[async_trait]
impl DocumentSender for TelegramSender {
    async fn send_document(&self, file: &UploadFileDto) -> Result<()> {
        Ok(self.post(file).await?)
    }
}
