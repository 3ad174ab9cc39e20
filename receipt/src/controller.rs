use crate::api::DecisionApi;
use crate::error::{ActionError, ClientError};
use crate::models::*;
use crate::selected_file::SelectedFile;
use crate::state::{Action, Failure, Phase, ViewState};
use uuid::Uuid;

pub const MSG_NO_FILE: &str = "Please select a PDF first";
pub const MSG_NO_QUESTION: &str = "Enter a question";
pub const MSG_UPLOADING: &str = "Uploading and indexing document...";
pub const MSG_UPLOAD_FAILED: &str = "Upload failed";
pub const MSG_SEARCHING: &str = "Searching policy documents...";
pub const MSG_RESULTS_FOUND: &str = "Results found";
pub const MSG_NO_RESULTS: &str = "No matching policy sections";
pub const MSG_QUERY_FAILED: &str = "Query failed";

/// A started upload: the attempt id to complete it with and the file to send.
#[derive(Debug, Clone)]
pub struct UploadTicket {
    pub attempt: Uuid,
    pub file: SelectedFile,
}

#[derive(Debug, Clone)]
pub struct QueryTicket {
    pub attempt: Uuid,
    pub question: String,
}

/// Owns the view state and drives it through upload and query attempts.
///
/// Each action is split into a `begin_*` transition (guards, busy phase),
/// the request itself, and a `finish_*` transition that always returns the
/// view to [`Phase::Idle`]. [`upload`](Self::upload) and
/// [`query`](Self::query) run all three in order.
pub struct ViewController<A> {
    api: A,
    state: ViewState,
}

impl<A: DecisionApi> ViewController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.state.selected_file = Some(file);
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.state.question = question.into();
    }

    pub fn begin_upload(&mut self) -> Result<UploadTicket, ActionError> {
        let file = self
            .state
            .selected_file
            .clone()
            .ok_or_else(|| ActionError::Validation(MSG_NO_FILE.to_string()))?;
        self.ensure_idle()?;

        let attempt = Uuid::new_v4();
        self.state.last_failure = None;
        self.state.status = MSG_UPLOADING.to_string();
        self.state.phase = Phase::Uploading { attempt };

        Ok(UploadTicket { attempt, file })
    }

    /// Applies the outcome of an upload. Returns `false` if `attempt` is not
    /// the upload currently in flight, in which case nothing changes.
    pub fn finish_upload(
        &mut self,
        attempt: Uuid,
        result: Result<UploadResponse, ClientError>,
    ) -> bool {
        if self.state.phase != (Phase::Uploading { attempt }) {
            log::warn!("Ignoring completion of stale upload {}", attempt);
            return false;
        }

        match result.and_then(|response| {
            response
                .pages_indexed
                .ok_or_else(|| ClientError::Decode("missing pages_indexed".to_string()))
        }) {
            Ok(pages) => {
                self.state.status = format!("Indexed {} pages successfully", pages);
            }
            Err(e) => {
                self.state.status = MSG_UPLOAD_FAILED.to_string();
                self.record_failure(Action::Upload, attempt, &e);
            }
        }

        self.state.phase = Phase::Idle;
        true
    }

    pub fn begin_query(&mut self) -> Result<QueryTicket, ActionError> {
        if self.state.question.trim().is_empty() {
            return Err(ActionError::Validation(MSG_NO_QUESTION.to_string()));
        }
        self.ensure_idle()?;

        let attempt = Uuid::new_v4();
        self.state.last_failure = None;
        self.state.results.clear();
        self.state.status = MSG_SEARCHING.to_string();
        self.state.phase = Phase::Querying { attempt };

        Ok(QueryTicket {
            attempt,
            question: self.state.question.clone(),
        })
    }

    pub fn finish_query(
        &mut self,
        attempt: Uuid,
        result: Result<QueryResponse, ClientError>,
    ) -> bool {
        if self.state.phase != (Phase::Querying { attempt }) {
            log::warn!("Ignoring completion of stale query {}", attempt);
            return false;
        }

        match result {
            Ok(response) => {
                self.state.results = response.results;
                self.state.status = if self.state.results.is_empty() {
                    MSG_NO_RESULTS.to_string()
                } else {
                    MSG_RESULTS_FOUND.to_string()
                };
            }
            Err(e) => {
                self.state.status = MSG_QUERY_FAILED.to_string();
                self.record_failure(Action::Query, attempt, &e);
            }
        }

        self.state.phase = Phase::Idle;
        true
    }

    pub async fn upload(&mut self) -> Result<(), ActionError> {
        let ticket = self.begin_upload()?;
        let result = self.api.upload(&ticket.file).await;
        self.finish_upload(ticket.attempt, result);
        Ok(())
    }

    pub async fn query(&mut self) -> Result<(), ActionError> {
        let ticket = self.begin_query()?;
        let result = self.api.query(&ticket.question).await;
        self.finish_query(ticket.attempt, result);
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), ActionError> {
        match self.state.phase.attempt() {
            None => Ok(()),
            Some((action, attempt)) => {
                log::warn!("Refusing new action while {:?} {} is in flight", action, attempt);
                Err(ActionError::Busy)
            }
        }
    }

    fn record_failure(&mut self, action: Action, attempt: Uuid, error: &ClientError) {
        log::error!("{:?} {} failed: {}", action, attempt, error);
        self.state.last_failure = Some(Failure {
            action,
            attempt,
            message: error.to_string(),
        });
    }
}
