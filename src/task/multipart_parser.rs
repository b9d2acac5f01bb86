use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures::StreamExt;
use log::debug;
use sanitize_filename::sanitize;
use uuid::Uuid;

use crate::task::models::UploadedFile;
use crate::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum MultipartParseError {
    #[error("Multipart field error: {0}")]
    FieldError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<MultipartParseError> for HttpResponse {
    fn from(error: MultipartParseError) -> Self {
        match error {
            MultipartParseError::FieldError(_) => {
                HttpResponse::BadRequest().json(ErrorResponse::bad_request(&error.to_string()))
            }
            MultipartParseError::IoError(_) => HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&error.to_string())),
        }
    }
}

pub struct MultipartParser;

impl MultipartParser {
    /// Collects the uploaded drawing files from a `files` multipart payload.
    ///
    /// Image bytes are drained from the stream and discarded; the report
    /// pipeline only needs stable references (id, filename, size). Count
    /// validation belongs to the task store, not the parser.
    pub async fn parse_upload_multipart(
        mut multipart: Multipart,
    ) -> Result<Vec<UploadedFile>, MultipartParseError> {
        let mut files: Vec<UploadedFile> = Vec::new();

        while let Some(item) = multipart.next().await {
            let mut field = item.map_err(|e| MultipartParseError::FieldError(e.to_string()))?;
            let content_disposition = field.content_disposition().ok_or_else(|| {
                MultipartParseError::FieldError("Content disposition not found".to_string())
            })?;
            let name = content_disposition
                .get_name()
                .ok_or_else(|| MultipartParseError::FieldError("Field name not found".to_string()))?;

            if name != "files" {
                continue;
            }

            let original_filename = match content_disposition.get_filename() {
                Some(fname) => sanitize(fname),
                None => format!("file_{}.dat", files.len()),
            };

            let mut size = 0usize;
            while let Some(chunk) = field.next().await {
                let data_chunk = chunk.map_err(|e| MultipartParseError::IoError(e.to_string()))?;
                size += data_chunk.len();
            }

            debug!("received upload field '{}' ({} bytes)", original_filename, size);

            files.push(UploadedFile {
                id: Uuid::new_v4(),
                filename: original_filename,
                size,
            });
        }

        Ok(files)
    }
}
