use axum::extract::{multipart::MultipartRejection, Multipart, State};
use tgrelay_proto::{
    dto::{RelayResult, UploadFileDto},
    UPLOAD_FIELD,
};

use super::{SharedServerState, UploadError};

use crate::{relay::RelaySession, Result};

pub async fn upload_telegram(
    State(state): State<SharedServerState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<String> {
    let files = match multipart {
        Ok(multipart) => read_files(multipart).await?,
        Err(rejection) => {
            log::debug!("Not a multipart request: {}", rejection);
            vec![]
        }
    };

    let session = RelaySession::new(state.sender.clone(), files);
    if session.is_empty() {
        return Err(UploadError::MissingFiles)?;
    }
    log::info!("[{}] Received {} file(s)", session.session_id, session.len());

    let results = session.run().await;
    Ok(RelayResult::join(&results))
}

/// Collects every `files` part carrying a filename, in request order.
async fn read_files(mut multipart: Multipart) -> Result<Vec<UploadFileDto>> {
    let mut files = vec![];
    while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(ToString::to_string) else {
            log::debug!("Skipping {} part without a filename", UPLOAD_FIELD);
            continue;
        };
        let content_type = field.content_type().map(ToString::to_string);
        let data = field.bytes().await.map_err(UploadError::from)?;
        files.push(UploadFileDto::new(file_name, content_type, data.to_vec()));
    }
    Ok(files)
}
