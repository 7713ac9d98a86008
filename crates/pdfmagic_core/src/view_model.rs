use std::path::PathBuf;

use crate::{Lifecycle, OperationKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationTab {
    pub key: OperationKey,
    pub label: &'static str,
    pub active: bool,
}

/// How the status message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub tabs: Vec<OperationTab>,
    pub helper_text: &'static str,
    pub accept_filter: &'static str,
    pub file_names: Vec<String>,
    pub lifecycle: Lifecycle,
    pub status_message: String,
    pub status_tone: StatusTone,
    pub submit_label: &'static str,
    /// False while a submission is in flight.
    pub submit_enabled: bool,
    pub last_saved: Option<PathBuf>,
    pub dirty: bool,
}
