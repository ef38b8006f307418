use crate::CAPTION_PREFIX;

/// One file part taken from an incoming upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFileDto {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadFileDto {
    /// Falls back to a type guessed from the file name when the part carried none.
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, data: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = match content_type {
            Some(content_type) if !content_type.is_empty() => content_type,
            _ => mime_guess::from_path(&file_name)
                .first_or_octet_stream()
                .to_string(),
        };
        Self {
            file_name,
            content_type,
            data,
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn caption(&self) -> String {
        format!("{}{}", CAPTION_PREFIX, self.file_name)
    }
}
