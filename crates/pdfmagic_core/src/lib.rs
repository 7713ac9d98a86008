//! PdfMagic core: operation catalog and the pure submission state machine.
mod effect;
mod msg;
mod operation;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use operation::{
    find_operation, list_operations, AcceptFilter, CatalogError, Operation, OperationKey,
};
pub use state::{
    AppState, Lifecycle, SelectedFile, SubmissionId, SubmitFailure, NO_FILES_MESSAGE,
    REJECTED_FALLBACK_MESSAGE, SUCCESS_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, OperationTab, StatusTone};
