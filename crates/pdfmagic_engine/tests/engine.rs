use std::fs;
use std::sync::{Arc, Mutex};

use pdfmagic_core::{OperationKey, SelectedFile};
use pdfmagic_engine::{
    EngineConfig, EngineEvent, EngineHandle, HealthStatus, PdfSaver, ServiceConfig, SubmitError,
    SubmitSettings, Submitter,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records calls and answers from a fixed result.
struct RecordingSubmitter {
    calls: Mutex<Vec<(String, Vec<String>)>>,
    reply: fn() -> Result<Vec<u8>, SubmitError>,
}

#[async_trait::async_trait]
impl Submitter for RecordingSubmitter {
    async fn submit(
        &self,
        endpoint: &str,
        files: &[SelectedFile],
    ) -> Result<Vec<u8>, SubmitError> {
        let names = files.iter().map(|file| file.name.clone()).collect();
        self.calls.lock().unwrap().push((endpoint.to_string(), names));
        (self.reply)()
    }

    async fn check_health(&self) -> Result<HealthStatus, SubmitError> {
        Ok(HealthStatus {
            status: "ok".to_string(),
        })
    }
}

#[test]
fn submit_routes_to_operation_endpoint_and_reports_completion() {
    let temp = TempDir::new().unwrap();
    let submitter = Arc::new(RecordingSubmitter {
        calls: Mutex::new(Vec::new()),
        reply: || Ok(b"%PDF".to_vec()),
    });
    let engine =
        EngineHandle::with_submitter(submitter.clone(), PdfSaver::new(temp.path())).unwrap();

    engine.submit(
        4,
        OperationKey::ImagesToPdf,
        vec![SelectedFile::from_path("x.png"), SelectedFile::from_path("y.png")],
    );

    match engine.recv().expect("event") {
        EngineEvent::SubmissionCompleted {
            submission_id,
            operation,
            result,
        } => {
            assert_eq!(submission_id, 4);
            assert_eq!(operation, OperationKey::ImagesToPdf);
            assert_eq!(result.unwrap(), b"%PDF");
        }
        other => panic!("unexpected event {other:?}"),
    }
    let calls = submitter.calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![(
            "/images-to-pdf".to_string(),
            vec!["x.png".to_string(), "y.png".to_string()]
        )]
    );
}

#[test]
fn save_command_writes_file_and_reports_path() {
    let temp = TempDir::new().unwrap();
    let submitter = Arc::new(RecordingSubmitter {
        calls: Mutex::new(Vec::new()),
        reply: || Err(SubmitError::Transport("unused".to_string())),
    });
    let engine = EngineHandle::with_submitter(submitter, PdfSaver::new(temp.path())).unwrap();

    engine.save("merge-pdf.pdf", b"%PDF-1.7".to_vec());

    match engine.recv().expect("event") {
        EngineEvent::SaveCompleted { file_name, result } => {
            assert_eq!(file_name, "merge-pdf.pdf");
            let path = result.expect("saved");
            assert_eq!(path, temp.path().join("merge-pdf.pdf"));
            assert_eq!(fs::read(path).unwrap(), b"%PDF-1.7");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn health_check_is_reported_as_event() {
    let temp = TempDir::new().unwrap();
    let submitter = Arc::new(RecordingSubmitter {
        calls: Mutex::new(Vec::new()),
        reply: || Ok(Vec::new()),
    });
    let engine = EngineHandle::with_submitter(submitter, PdfSaver::new(temp.path())).unwrap();

    engine.check_health();

    match engine.recv().expect("event") {
        EngineEvent::HealthChecked { result } => assert!(result.unwrap().is_ok()),
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn engine_submits_over_http_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/merge-pdf"))
        .respond_with(ResponseTemplate::new(422).set_body_string("Empty file: a.pdf"))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let input = temp.path().join("a.pdf");
    fs::write(&input, b"%PDF").unwrap();

    let config = EngineConfig {
        submit: SubmitSettings::with_service(ServiceConfig::new(server.uri())),
        output_dir: temp.path().join("out"),
    };
    let engine = EngineHandle::new(config).unwrap();
    engine.submit(1, OperationKey::MergePdf, vec![SelectedFile::from_path(&input)]);

    let event = tokio::task::spawn_blocking(move || engine.recv())
        .await
        .unwrap()
        .expect("event");
    match event {
        EngineEvent::SubmissionCompleted { result, .. } => match result {
            Err(SubmitError::Rejected { status, body }) => {
                assert_eq!(status, 422);
                assert_eq!(body, "Empty file: a.pdf");
            }
            other => panic!("expected rejection, got {other:?}"),
        },
        other => panic!("unexpected event {other:?}"),
    }
}
