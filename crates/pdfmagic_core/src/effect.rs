use crate::{OperationKey, SelectedFile, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the files, in order, to the operation's endpoint.
    Submit {
        submission_id: SubmissionId,
        operation: OperationKey,
        files: Vec<SelectedFile>,
    },
    /// Hand the generated PDF to the local save helper.
    SavePdf { file_name: String, bytes: Vec<u8> },
}
