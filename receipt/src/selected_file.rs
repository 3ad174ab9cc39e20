use crate::error::ClientError;
use std::path::Path;

pub const PDF_MIME: &str = "application/pdf";

/// A user-chosen document, held in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub async fn from_path(file_path: &Path) -> Result<Self, ClientError> {
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} does not name a file", file_path.display()),
                )
            })?;

        let bytes = tokio::fs::read(file_path).await?;
        log::info!("Selected {} ({} bytes)", file_name, bytes.len());

        Ok(Self { file_name, bytes })
    }
}
