//! PdfMagic engine: transport, local save and effect execution.
mod config;
mod engine;
mod health;
mod save;
mod submit;
mod types;

pub use config::{ServiceConfig, SubmitSettings, API_BASE_ENV, DEFAULT_API_BASE};
pub use engine::{EngineConfig, EngineHandle};
pub use health::{HealthStatus, HEALTH_ENDPOINT};
pub use save::{ensure_output_dir, PdfSaver, SaveError};
pub use submit::{ReqwestSubmitter, Submitter, FILES_FIELD};
pub use types::{EngineError, EngineEvent, SubmitError};
