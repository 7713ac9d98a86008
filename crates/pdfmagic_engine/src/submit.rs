use engine_logging::{engine_debug, engine_info, engine_warn};
use pdfmagic_core::SelectedFile;
use reqwest::multipart::{Form, Part};

use crate::config::{ServiceConfig, SubmitSettings};
use crate::{EngineError, HealthStatus, SubmitError};

/// Multipart field name the service expects for every uploaded file.
pub const FILES_FIELD: &str = "files";

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    /// POSTs `files` in order to `endpoint` and returns the PDF body.
    async fn submit(&self, endpoint: &str, files: &[SelectedFile])
        -> Result<Vec<u8>, SubmitError>;

    /// Probes the service's health endpoint.
    async fn check_health(&self) -> Result<HealthStatus, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    client: reqwest::Client,
    service: ServiceConfig,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|err| EngineError::Client(err.to_string()))?;
        Ok(Self {
            client,
            service: settings.service,
        })
    }

    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(
        &self,
        endpoint: &str,
        files: &[SelectedFile],
    ) -> Result<Vec<u8>, SubmitError> {
        let url = self.service.endpoint_url(endpoint);
        let form = build_form(files).await?;
        engine_info!("POST {} with {} file(s)", url, files.len());

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    engine_warn!("Could not read error body from {}: {}", url, err);
                    String::new()
                }
            };
            engine_warn!("{} answered {} ({} byte body)", url, status, body.len());
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        engine_debug!("{} returned {} bytes", url, bytes.len());
        Ok(bytes.to_vec())
    }

    async fn check_health(&self) -> Result<HealthStatus, SubmitError> {
        crate::health::check_health(&self.client, &self.service).await
    }
}

/// One `files` part per selected file, in selection order.
async fn build_form(files: &[SelectedFile]) -> Result<Form, SubmitError> {
    let mut form = Form::new();
    for file in files {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| SubmitError::Input {
                path: file.path.clone(),
                source,
            })?;
        let mime = mime_guess::from_path(&file.name).first_or_octet_stream();
        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(mime.essence_str())
            .map_err(map_reqwest_error)?;
        form = form.part(FILES_FIELD, part);
    }
    Ok(form)
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    SubmitError::Transport(err.to_string())
}
