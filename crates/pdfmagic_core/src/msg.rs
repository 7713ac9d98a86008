use std::path::PathBuf;

use crate::{OperationKey, SelectedFile, SubmissionId, SubmitFailure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User switched to another operation tab.
    OperationSelected(OperationKey),
    /// User picked files, in picker order.
    FilesChosen(Vec<SelectedFile>),
    /// User pressed the submit control.
    SubmitClicked,
    /// Engine completion for a submission. `Ok` carries the PDF bytes.
    SubmissionFinished {
        submission_id: SubmissionId,
        operation: OperationKey,
        result: Result<Vec<u8>, SubmitFailure>,
    },
    /// Engine completion for a local save.
    SaveFinished {
        file_name: String,
        result: Result<PathBuf, String>,
    },
}
