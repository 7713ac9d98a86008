use engine_logging::{engine_info, engine_warn};
use pdfmagic_core::{Effect, Msg};
use pdfmagic_engine::{EngineEvent, EngineHandle};

/// Turns core effects into engine commands and engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit {
                    submission_id,
                    operation,
                    files,
                } => {
                    engine_info!(
                        "Submit submission_id={} operation={} files={}",
                        submission_id,
                        operation,
                        files.len()
                    );
                    self.engine.submit(submission_id, operation, files);
                }
                Effect::SavePdf { file_name, bytes } => {
                    engine_info!("SavePdf file_name={} bytes={}", file_name, bytes.len());
                    self.engine.save(file_name, bytes);
                }
            }
        }
    }

    /// Blocks until the engine reports something the state machine cares about.
    pub fn next_msg(&self) -> Option<Msg> {
        loop {
            let event = self.engine.recv()?;
            if let Some(msg) = map_event(event) {
                return Some(msg);
            }
        }
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::SubmissionCompleted {
            submission_id,
            operation,
            result,
        } => Some(Msg::SubmissionFinished {
            submission_id,
            operation,
            result: result.map_err(|err| err.to_failure()),
        }),
        EngineEvent::SaveCompleted { file_name, result } => Some(Msg::SaveFinished {
            file_name,
            result: result.map_err(|err| err.to_string()),
        }),
        EngineEvent::HealthChecked { .. } => {
            engine_warn!("Ignoring health result outside of a health check");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pdfmagic_core::{OperationKey, SubmitFailure};
    use pdfmagic_engine::{SaveError, SubmitError};

    use super::*;

    #[test]
    fn rejection_keeps_status_and_body() {
        let msg = map_event(EngineEvent::SubmissionCompleted {
            submission_id: 3,
            operation: OperationKey::MergePdf,
            result: Err(SubmitError::Rejected {
                status: 400,
                body: "bad request".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Some(Msg::SubmissionFinished {
                submission_id: 3,
                operation: OperationKey::MergePdf,
                result: Err(SubmitFailure::Rejected {
                    status: 400,
                    body: "bad request".to_string(),
                }),
            })
        );
    }

    #[test]
    fn save_error_becomes_text() {
        let msg = map_event(EngineEvent::SaveCompleted {
            file_name: "merge-pdf.pdf".to_string(),
            result: Err(SaveError::NotADirectory(PathBuf::from("out"))),
        });
        assert_eq!(
            msg,
            Some(Msg::SaveFinished {
                file_name: "merge-pdf.pdf".to_string(),
                result: Err("out is not a directory".to_string()),
            })
        );
    }

    #[test]
    fn saved_path_is_forwarded() {
        let msg = map_event(EngineEvent::SaveCompleted {
            file_name: "merge-files.pdf".to_string(),
            result: Ok(PathBuf::from("out/merge-files.pdf")),
        });
        assert!(matches!(msg, Some(Msg::SaveFinished { result: Ok(_), .. })));
    }
}
