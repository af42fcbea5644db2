/// A CSV file to be sent as the `file` part of a multipart upload.
/// The backend owns all validation; nothing is checked on this side.
#[derive(Debug, Clone)]
pub struct V1UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
