use actix_multipart::form::{MultipartForm, tempfile::TempFile};

/// Multipart body of a media upload; the file arrives under the `file` key.
#[derive(MultipartForm)]
pub struct UploadMediaForm {
    #[multipart(limit = "10MB")]
    pub file: TempFile,
}
