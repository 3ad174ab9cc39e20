use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::models::*;
use crate::query_service::QueryService;
use crate::selected_file::SelectedFile;
use crate::upload_service::UploadService;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// The two calls the view makes against the indexing/query service.
#[async_trait]
pub trait DecisionApi: Send + Sync {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, ClientError>;

    async fn query(&self, question: &str) -> Result<QueryResponse, ClientError>;
}

/// HTTP implementation of [`DecisionApi`] sharing one connection pool.
pub struct ReceiptApi {
    upload_service: UploadService,
    query_service: QueryService,
}

impl ReceiptApi {
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::new();

        Self {
            upload_service: UploadService::new(client.clone(), config.clone()),
            query_service: QueryService::new(client, config),
        }
    }
}

#[async_trait]
impl DecisionApi for ReceiptApi {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, ClientError> {
        self.upload_service.upload(file).await
    }

    async fn query(&self, question: &str) -> Result<QueryResponse, ClientError> {
        self.query_service.query(question).await
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}
