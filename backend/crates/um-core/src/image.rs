//! Uploaded image handling.
//!
//! Images are stored inline as `data:<mime>;base64,<payload>` strings. When no
//! image is uploaded the record points at a fixed placeholder avatar.

use crate::{CoreError, Result as CoreErrorResult};

use std::path::{Path, PathBuf};

use base64::Engine;

/// Default avatar used when no image is uploaded
pub const PLACEHOLDER_IMAGE_URI: &str =
    "https://www.gravatar.com/avatar/00000000000000000000000000000000?d=mp&f=y";

const FALLBACK_MIME: &str = "application/octet-stream";

/// An image supplied with a create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// File on disk, read when the operation runs
    File(PathBuf),
    /// Already loaded bytes, e.g. from a multipart upload
    Bytes { file_name: String, bytes: Vec<u8> },
}

impl ImageSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Read the image and encode it as a data URI.
    ///
    /// Reading a file is the only await point of a create/update.
    pub async fn to_data_uri(&self) -> CoreErrorResult<String> {
        match self {
            Self::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| CoreError::image_read(path.clone(), e))?;
                Ok(encode_data_uri(mime_for(path), &bytes))
            }
            Self::Bytes { file_name, bytes } => {
                Ok(encode_data_uri(mime_for(Path::new(file_name)), bytes))
            }
        }
    }
}

/// Resolve an optional upload to the value stored in `image`.
pub async fn resolve_or_placeholder(image: Option<&ImageSource>) -> CoreErrorResult<String> {
    match image {
        Some(source) => source.to_data_uri().await,
        None => Ok(PLACEHOLDER_IMAGE_URI.to_string()),
    }
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{payload}")
}

/// Media type guessed from the file extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        _ => FALLBACK_MIME,
    }
}
