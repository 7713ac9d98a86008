use pdfmagic_engine::{ReqwestSubmitter, ServiceConfig, SubmitError, SubmitSettings, Submitter};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn submitter_for(base_url: &str) -> ReqwestSubmitter {
    ReqwestSubmitter::new(SubmitSettings::with_service(ServiceConfig::new(base_url)))
        .expect("client builds")
}

#[tokio::test]
async fn health_reports_ok_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
        .mount(&server)
        .await;

    let health = submitter_for(&server.uri()).check_health().await.expect("healthy");
    assert!(health.is_ok());
}

#[tokio::test]
async fn health_with_trailing_slash_base_hits_single_slash_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    submitter_for(&base).check_health().await.expect("healthy");
}

#[tokio::test]
async fn health_failure_status_is_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let err = submitter_for(&server.uri()).check_health().await.unwrap_err();
    assert!(matches!(err, SubmitError::Rejected { status: 503, .. }));
}

#[tokio::test]
async fn health_with_unexpected_payload_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = submitter_for(&server.uri()).check_health().await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
}
