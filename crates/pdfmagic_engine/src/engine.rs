use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_error, engine_info, engine_warn};
use pdfmagic_core::{OperationKey, SelectedFile, SubmissionId};

use crate::config::SubmitSettings;
use crate::save::PdfSaver;
use crate::submit::{ReqwestSubmitter, Submitter};
use crate::{EngineError, EngineEvent};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub submit: SubmitSettings,
    pub output_dir: PathBuf,
}

impl EngineConfig {
    pub fn default_with_output(output_dir: PathBuf) -> Self {
        Self {
            submit: SubmitSettings::default(),
            output_dir,
        }
    }
}

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        operation: OperationKey,
        files: Vec<SelectedFile>,
    },
    Save {
        file_name: String,
        bytes: Vec<u8>,
    },
    CheckHealth,
}

/// Executes submissions and saves on a background thread.
///
/// Dispatched submissions always run to completion; there is no cancel command.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let submitter = Arc::new(ReqwestSubmitter::new(config.submit)?);
        Self::with_submitter(submitter, PdfSaver::new(config.output_dir))
    }

    pub fn with_submitter(
        submitter: Arc<dyn Submitter>,
        saver: PdfSaver,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Submit {
                        submission_id,
                        operation,
                        files,
                    } => {
                        let submitter = submitter.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = submitter
                                .submit(operation.operation().endpoint, &files)
                                .await;
                            if let Err(err) = &result {
                                engine_warn!(
                                    "Submission {} ({}) failed: {}",
                                    submission_id,
                                    operation,
                                    err
                                );
                            }
                            let _ = event_tx.send(EngineEvent::SubmissionCompleted {
                                submission_id,
                                operation,
                                result,
                            });
                        });
                    }
                    EngineCommand::Save { file_name, bytes } => {
                        let result = saver.save(&file_name, &bytes);
                        match &result {
                            Ok(path) => engine_info!("Saved {} bytes to {:?}", bytes.len(), path),
                            Err(err) => engine_error!("Failed to save {}: {}", file_name, err),
                        }
                        let _ = event_tx.send(EngineEvent::SaveCompleted { file_name, result });
                    }
                    EngineCommand::CheckHealth => {
                        let submitter = submitter.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = submitter.check_health().await;
                            let _ = event_tx.send(EngineEvent::HealthChecked { result });
                        });
                    }
                }
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(
        &self,
        submission_id: SubmissionId,
        operation: OperationKey,
        files: Vec<SelectedFile>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            submission_id,
            operation,
            files,
        });
    }

    pub fn save(&self, file_name: impl Into<String>, bytes: Vec<u8>) {
        let _ = self.cmd_tx.send(EngineCommand::Save {
            file_name: file_name.into(),
            bytes,
        });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckHealth);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}
