use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::modules::content::application::ports::outgoing::UploadFile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("Image is empty")]
    Empty,

    #[error("Image exceeds the {max_bytes} byte limit")]
    TooLarge { max_bytes: u64 },

    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
    pub bucket_name: String,
    /// Object path prefix inside the bucket.
    pub folder: &'static str,
}

impl UploadPolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "certificates";
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/gif"];
    pub const FALLBACK_EXTENSION: &'static str = "png";

    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
            bucket_name: bucket_name.into(),
            folder: "certificates",
        }
    }

    pub fn check(&self, file: &UploadFile) -> Result<(), UploadPolicyError> {
        if file.size() == 0 {
            return Err(UploadPolicyError::Empty);
        }

        if file.size() > self.max_file_size_bytes {
            return Err(UploadPolicyError::TooLarge {
                max_bytes: self.max_file_size_bytes,
            });
        }

        let content_type = normalize_mime(&file.content_type);
        if !self.allowed_mime_types.contains(&content_type.as_str()) {
            return Err(UploadPolicyError::UnsupportedType(file.content_type.clone()));
        }

        Ok(())
    }

    /// Collision-resistant object path: `{folder}/{uuid}.{ext}`.
    pub fn object_path(&self, file: &UploadFile) -> String {
        format!("{}/{}.{}", self.folder, Uuid::new_v4(), extension_for(file))
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BUCKET_NAME)
    }
}

fn normalize_mime(raw: &str) -> String {
    raw.split(';').next().unwrap_or_default().trim().to_ascii_lowercase()
}

fn extension_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9]{1,10}$").expect("static pattern"))
}

/// Extension from the uploaded file name when it looks sane, else from the
/// content type, else `png`.
pub fn extension_for(file: &UploadFile) -> String {
    let from_name = file
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| extension_pattern().is_match(ext));

    if let Some(ext) = from_name {
        return ext.to_ascii_lowercase();
    }

    let from_mime = match normalize_mime(&file.content_type).as_str() {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    };

    from_mime
        .unwrap_or(UploadPolicy::FALLBACK_EXTENSION)
        .to_string()
}
