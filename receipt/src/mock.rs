//! Scripted [`DecisionApi`] for controller tests.

use crate::api::DecisionApi;
use crate::error::ClientError;
use crate::models::*;
use crate::selected_file::SelectedFile;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Clone, Debug)]
pub enum MockReply {
    Pages(u64),
    Evidence(Vec<EvidenceItem>),
    /// Simulate a rejected call with this service error message.
    Fail(String),
}

/// Records every call as `"upload <file>"` / `"query <question>"`.
pub struct MockApi {
    upload_reply: MockReply,
    query_reply: MockReply,
    calls: Mutex<Vec<String>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            upload_reply: MockReply::Pages(1),
            query_reply: MockReply::Evidence(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockApi {
    pub fn upload_reply(mut self, reply: MockReply) -> Self {
        self.upload_reply = reply;
        self
    }

    pub fn query_reply(mut self, reply: MockReply) -> Self {
        self.query_reply = reply;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DecisionApi for MockApi {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("upload {}", file.file_name));

        match &self.upload_reply {
            MockReply::Pages(pages) => Ok(UploadResponse {
                pages_indexed: Some(*pages),
                message: Some("Document uploaded and indexed".to_string()),
                error: None,
            }),
            MockReply::Evidence(_) => Err(ClientError::Decode("not an upload reply".to_string())),
            MockReply::Fail(message) => Err(ClientError::Service(message.clone())),
        }
    }

    async fn query(&self, question: &str) -> Result<QueryResponse, ClientError> {
        self.calls.lock().unwrap().push(format!("query {}", question));

        match &self.query_reply {
            MockReply::Evidence(results) => Ok(QueryResponse {
                results: results.clone(),
                error: None,
            }),
            MockReply::Pages(_) => Err(ClientError::Decode("not a query reply".to_string())),
            MockReply::Fail(message) => Err(ClientError::Service(message.clone())),
        }
    }
}
