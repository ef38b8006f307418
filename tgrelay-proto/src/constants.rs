pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND: &'static str = "127.0.0.1";
pub const DEFAULT_API_URL: &'static str = "https://api.telegram.org";

/// Multipart field carrying the uploaded files, repeatable.
pub const UPLOAD_FIELD: &'static str = "files";

/// Multipart fields of the outbound `sendDocument` call.
pub const DOCUMENT_FIELD: &'static str = "document";
pub const CHAT_ID_FIELD: &'static str = "chat_id";
pub const CAPTION_FIELD: &'static str = "caption";

pub const CAPTION_PREFIX: &'static str = "ไฟล์: ";
pub const MISSING_FILES_MESSAGE: &'static str = "ไม่พบไฟล์";
pub const RESULT_SEPARATOR: &'static str = ", ";

/// Bot API limit for documents sent by bots.
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 50 * 1024 * 1024;
