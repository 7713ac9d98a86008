use serde::Deserialize;

use crate::config::ServiceConfig;
use crate::submit::map_reqwest_error;
use crate::SubmitError;

pub const HEALTH_ENDPOINT: &str = "/health";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// GET `{base_url}/health` and parse `{"status": ...}`.
pub(crate) async fn check_health(
    client: &reqwest::Client,
    service: &ServiceConfig,
) -> Result<HealthStatus, SubmitError> {
    let url = service.endpoint_url(HEALTH_ENDPOINT);
    let response = client.get(&url).send().await.map_err(map_reqwest_error)?;

    let status = response.status();
    let body = response.text().await.map_err(map_reqwest_error)?;
    if !status.is_success() {
        return Err(SubmitError::Rejected {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body)
        .map_err(|err| SubmitError::Transport(format!("unexpected health payload: {err}")))
}
