use crate::models::EvidenceItem;
use crate::selected_file::SelectedFile;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Upload,
    Query,
}

/// What the view is doing right now. At most one request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Uploading { attempt: Uuid },
    Querying { attempt: Uuid },
}

impl Phase {
    pub fn attempt(&self) -> Option<(Action, Uuid)> {
        match *self {
            Phase::Idle => None,
            Phase::Uploading { attempt } => Some((Action::Upload, attempt)),
            Phase::Querying { attempt } => Some((Action::Query, attempt)),
        }
    }
}

/// Detail of the last rejected call, kept after the status line is reset
/// to its generic text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub action: Action,
    pub attempt: Uuid,
    pub message: String,
}

/// Everything the view renders. Only [`crate::controller::ViewController`]
/// mutates it.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub(crate) selected_file: Option<SelectedFile>,
    pub(crate) question: String,
    pub(crate) status: String,
    pub(crate) phase: Phase,
    pub(crate) results: Vec<EvidenceItem>,
    pub(crate) last_failure: Option<Failure>,
}

impl ViewState {
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn results(&self) -> &[EvidenceItem] {
        &self.results
    }

    pub fn last_failure(&self) -> Option<&Failure> {
        self.last_failure.as_ref()
    }
}
