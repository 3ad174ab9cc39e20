use crate::api::read_json;
use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::models::*;
use crate::selected_file::{SelectedFile, PDF_MIME};
use reqwest::multipart::{Form, Part};
use reqwest::Client;

pub struct UploadService {
    client: Client,
    config: ApiConfig,
}

impl UploadService {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Sends the file as the `file` field of a multipart form to `/upload`.
    pub async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, ClientError> {
        let url = self.config.endpoint("upload");
        log::info!("Uploading {} to {}", file.file_name, url);

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(PDF_MIME)?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let mut upload: UploadResponse = read_json(response).await?;

        if let Some(error) = upload.error.take() {
            return Err(ClientError::Service(error));
        }

        log::info!("Service indexed {:?} pages", upload.pages_indexed);
        Ok(upload)
    }
}
