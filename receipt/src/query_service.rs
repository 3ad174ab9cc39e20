use crate::api::read_json;
use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::models::*;
use reqwest::Client;

pub struct QueryService {
    client: Client,
    config: ApiConfig,
}

impl QueryService {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub async fn query(&self, question: &str) -> Result<QueryResponse, ClientError> {
        let url = self.config.endpoint("query");
        log::info!("Querying {} ({} chars)", url, question.chars().count());

        let request = QueryRequest {
            question: question.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let query_response: QueryResponse = read_json(response).await?;

        // An `error` body still resolves; its missing results read as no matches.
        if let Some(error) = &query_response.error {
            log::warn!("Query service reported: {}", error);
        }

        log::info!("Found {} evidence items", query_response.results.len());
        Ok(query_response)
    }
}
