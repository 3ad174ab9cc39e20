use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub page: u32,
    #[serde(alias = "similarity")]
    pub confidence: f64,
    pub policy_text: String,
}

impl EvidenceItem {
    /// Confidence as a percentage with two decimals, e.g. `87.00%`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub pages_indexed: Option<u64>,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, alias = "matches", deserialize_with = "null_as_empty")]
    pub results: Vec<EvidenceItem>,
    pub error: Option<String>,
}

// `results: null` is treated the same as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<EvidenceItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<EvidenceItem>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_null_results_are_empty() {
        let missing: QueryResponse = serde_json::from_str(r#"{"question": "x"}"#).unwrap();
        assert!(missing.results.is_empty());

        let null: QueryResponse = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert!(null.results.is_empty());
    }

    #[test]
    fn backend_field_names_are_accepted() {
        let body = r#"{
            "question": "refunds?",
            "matches": [{"page": 4, "similarity": 0.412, "policy_text": "Refunds..."}]
        }"#;
        let response: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.results,
            vec![EvidenceItem {
                page: 4,
                confidence: 0.412,
                policy_text: "Refunds...".to_string(),
            }]
        );
    }

    #[test]
    fn confidence_is_formatted_with_two_decimals() {
        let item = EvidenceItem {
            page: 3,
            confidence: 0.87,
            policy_text: String::new(),
        };
        assert_eq!(item.confidence_percent(), "87.00%");

        let low = EvidenceItem { confidence: 0.00456, ..item };
        assert_eq!(low.confidence_percent(), "0.46%");
    }

    #[test]
    fn service_error_body_parses() {
        let body = r#"{"error": "No document indexed yet"}"#;
        let upload: UploadResponse = serde_json::from_str(body).unwrap();
        assert_eq!(upload.error.as_deref(), Some("No document indexed yet"));
        assert!(upload.pages_indexed.is_none());
    }
}
