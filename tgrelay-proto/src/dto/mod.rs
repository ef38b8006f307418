mod relay_result;
mod send_document_dto;
mod upload_file_dto;

pub use relay_result::*;
pub use send_document_dto::*;
pub use upload_file_dto::*;
