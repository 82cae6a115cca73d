use async_trait::async_trait;

use super::table_client::RemoteError;

/// A file handed over by the admin for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Port for the file-object store.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `file` at `path` inside `bucket` (overwriting) and returns the
    /// public URL of the stored object.
    async fn upload_file(
        &self,
        bucket: &str,
        path: &str,
        file: UploadFile,
    ) -> Result<String, RemoteError>;
}
