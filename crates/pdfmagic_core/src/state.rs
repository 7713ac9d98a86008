use std::path::{Path, PathBuf};

use crate::operation::{Operation, OperationKey};
use crate::view_model::{AppViewModel, OperationTab, StatusTone};

pub type SubmissionId = u64;

pub const NO_FILES_MESSAGE: &str = "Please select at least one file.";
pub const SUCCESS_MESSAGE: &str = "PDF generated successfully.";
pub const REJECTED_FALLBACK_MESSAGE: &str = "Request failed";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Something went wrong.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// A file chosen by the user. Only the path and display name are held here;
/// the engine reads the bytes when the request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, name }
    }
}

/// Why a submission did not produce a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// The service answered with a non-success status. `body` may be empty.
    Rejected { status: u16, body: String },
    /// The request never completed.
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    active: OperationKey,
    files: Vec<SelectedFile>,
    lifecycle: Lifecycle,
    status_message: String,
    next_submission_id: SubmissionId,
    in_flight: Option<SubmissionId>,
    pending_saves: Vec<String>,
    last_saved: Option<PathBuf>,
    tone_override: Option<StatusTone>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_operation(&self) -> &'static Operation {
        self.active.operation()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    /// True while a request or any resulting save has not settled yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some() || !self.pending_saves.is_empty()
    }

    pub fn view(&self) -> AppViewModel {
        let active = self.active_operation();
        AppViewModel {
            tabs: crate::list_operations()
                .iter()
                .map(|operation| OperationTab {
                    key: operation.key,
                    label: operation.label,
                    active: operation.key == self.active,
                })
                .collect(),
            helper_text: active.helper_text,
            accept_filter: active.accept.as_str(),
            file_names: self.files.iter().map(|file| file.name.clone()).collect(),
            lifecycle: self.lifecycle,
            status_message: self.status_message.clone(),
            status_tone: self.status_tone(),
            submit_label: if self.lifecycle == Lifecycle::Submitting {
                "Processing..."
            } else {
                "Create PDF"
            },
            submit_enabled: self.in_flight.is_none(),
            last_saved: self.last_saved.clone(),
            dirty: self.dirty,
        }
    }

    fn status_tone(&self) -> StatusTone {
        if let Some(tone) = self.tone_override {
            return tone;
        }
        match self.lifecycle {
            Lifecycle::Idle | Lifecycle::Submitting => StatusTone::Neutral,
            Lifecycle::Succeeded => StatusTone::Success,
            Lifecycle::Failed => StatusTone::Error,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn in_flight(&self) -> Option<SubmissionId> {
        self.in_flight
    }

    pub(crate) fn select_operation(&mut self, key: OperationKey) {
        self.active = key;
        self.files.clear();
        self.tone_override = None;
        self.lifecycle = Lifecycle::Idle;
        self.status_message.clear();
        self.dirty = true;
    }

    pub(crate) fn set_files(&mut self, files: Vec<SelectedFile>) {
        self.files = files;
        self.tone_override = None;
        self.status_message.clear();
        self.dirty = true;
    }

    /// Local validation notice; shown neutral whatever the lifecycle.
    pub(crate) fn set_notice(&mut self, message: impl Into<String>) {
        self.tone_override = Some(StatusTone::Neutral);
        self.status_message = message.into();
        self.dirty = true;
    }

    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.next_submission_id += 1;
        let id = self.next_submission_id;
        self.in_flight = Some(id);
        self.tone_override = None;
        self.lifecycle = Lifecycle::Submitting;
        self.status_message.clear();
        self.dirty = true;
        id
    }

    pub(crate) fn finish_submission(&mut self, lifecycle: Lifecycle, message: impl Into<String>) {
        self.in_flight = None;
        self.tone_override = None;
        self.lifecycle = lifecycle;
        self.status_message = message.into();
        self.dirty = true;
    }

    pub(crate) fn begin_save(&mut self, file_name: &str) {
        self.pending_saves.push(file_name.to_string());
    }

    /// Saves finish in the order they were requested, so the oldest pending
    /// entry with this name is the one settled. Returns false for unknown saves.
    pub(crate) fn finish_save(&mut self, file_name: &str) -> bool {
        let Some(index) = self.pending_saves.iter().position(|name| name == file_name) else {
            return false;
        };
        self.pending_saves.remove(index);
        self.dirty = true;
        true
    }

    pub(crate) fn record_save_failure(&mut self, message: impl Into<String>) {
        self.tone_override = Some(StatusTone::Error);
        self.status_message = message.into();
        self.dirty = true;
    }

    pub(crate) fn record_saved(&mut self, path: &Path) {
        self.last_saved = Some(path.to_path_buf());
        self.dirty = true;
    }
}
