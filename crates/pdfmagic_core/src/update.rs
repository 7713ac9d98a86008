use crate::{
    AppState, Effect, Lifecycle, Msg, SubmitFailure, NO_FILES_MESSAGE,
    REJECTED_FALLBACK_MESSAGE, SUCCESS_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// A submission cannot be cancelled; it only leaves `Submitting` through a
/// matching `SubmissionFinished`.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::OperationSelected(key) => {
            state.select_operation(key);
            Vec::new()
        }
        Msg::FilesChosen(files) => {
            // Lifecycle is left as is; only the message is cleared.
            state.set_files(files);
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.in_flight().is_some() {
                return (state, Vec::new());
            }
            if state.files().is_empty() {
                state.set_notice(NO_FILES_MESSAGE);
                return (state, Vec::new());
            }
            let operation = state.active_operation().key;
            let files = state.files().to_vec();
            let submission_id = state.begin_submission();
            vec![Effect::Submit {
                submission_id,
                operation,
                files,
            }]
        }
        Msg::SubmissionFinished {
            submission_id,
            operation,
            result,
        } => {
            if state.in_flight() != Some(submission_id) {
                return (state, Vec::new());
            }
            match result {
                Ok(bytes) => {
                    let file_name = operation.operation().output_file_name();
                    state.begin_save(&file_name);
                    state.finish_submission(Lifecycle::Succeeded, SUCCESS_MESSAGE);
                    vec![Effect::SavePdf { file_name, bytes }]
                }
                Err(failure) => {
                    state.finish_submission(Lifecycle::Failed, failure_message(failure));
                    Vec::new()
                }
            }
        }
        Msg::SaveFinished { file_name, result } => {
            if state.finish_save(&file_name) {
                match result {
                    Ok(path) => state.record_saved(&path),
                    Err(reason) => {
                        state.record_save_failure(format!("Could not save {file_name}: {reason}"));
                    }
                }
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn failure_message(failure: SubmitFailure) -> String {
    match failure {
        SubmitFailure::Rejected { body, .. } if !body.is_empty() => body,
        SubmitFailure::Rejected { .. } => REJECTED_FALLBACK_MESSAGE.to_string(),
        SubmitFailure::Transport => TRANSPORT_FAILURE_MESSAGE.to_string(),
    }
}
