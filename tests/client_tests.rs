// Integration tests against a mock analysis backend

use resume_screener::render::render_result;
use resume_screener::{
    analyze_resume, ScoreBand, ScreenError, ScreenerClient, ScreenerConfig, ScreeningSession,
};
use std::io::Write;

fn stub_resume() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("resume")
        .suffix(".pdf")
        .tempfile()
        .expect("Failed to create stub resume");
    file.write_all(b"%PDF-1.4 stub resume content")
        .expect("Failed to write stub resume");
    file
}

#[tokio::test]
async fn analyze_parses_successful_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "score": 85,
                "matched_skills": ["Python"],
                "missing_skills": [],
                "recommendations": [],
                "keyword_density": {"Python": 3}
            }"#,
        )
        .create_async()
        .await;

    let resume = stub_resume();
    let config = ScreenerConfig::new(server.url());
    let result = analyze_resume(&config, resume.path(), "Senior Python developer")
        .await
        .expect("Analysis should succeed");

    mock.assert_async().await;
    assert_eq!(result.score, 85.0);
    assert_eq!(result.band(), ScoreBand::Excellent);

    let rendered = render_result(&result);
    assert!(rendered.contains("Excellent Match"));
    assert!(rendered.contains("Matched Skills (1):"));
    assert!(rendered.contains("✓ Python"));
    assert!(!rendered.contains("Missing Skills"));
    assert!(!rendered.contains("Recommendations"));
    assert!(rendered.contains("Python: 3 occurrences"));
}

#[tokio::test]
async fn analyze_tolerates_minimal_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"score": 61}"#)
        .create_async()
        .await;

    let resume = stub_resume();
    let config = ScreenerConfig::new(server.url());
    let result = analyze_resume(&config, resume.path(), "Any role")
        .await
        .expect("Minimal response should parse");

    mock.assert_async().await;
    assert_eq!(result.band(), ScoreBand::Moderate);
    assert!(result.matched_skills.is_none());
    assert!(result.keyword_density.is_none());
}

#[tokio::test]
async fn server_error_surfaces_status_and_keeps_no_result() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .with_status(500)
        .with_body("analysis engine unavailable")
        .create_async()
        .await;

    let resume = stub_resume();
    let config = ScreenerConfig::new(server.url());
    let client = ScreenerClient::new(&config).unwrap();

    let mut session = ScreeningSession::new();
    session.attach(resume.path()).unwrap();
    session.set_job_description("Senior Python developer");

    let err = session.submit(&client).await.unwrap_err();
    mock.assert_async().await;

    assert!(matches!(err, ScreenError::Backend { status, .. } if status.as_u16() == 500));
    assert!(err.to_string().contains("500"));
    assert!(session.result().is_none());
    assert!(session.failure().unwrap().contains("500"));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/upload")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let resume = stub_resume();
    let config = ScreenerConfig::new(server.url());
    let err = analyze_resume(&config, resume.path(), "Any role")
        .await
        .unwrap_err();

    assert!(matches!(err, ScreenError::MalformedResponse(_)));
}

#[tokio::test]
async fn incomplete_inputs_never_reach_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .expect(0)
        .create_async()
        .await;

    let config = ScreenerConfig::new(server.url());
    let client = ScreenerClient::new(&config).unwrap();

    // No file held
    let mut no_file = ScreeningSession::new();
    no_file.set_job_description("Senior Python developer");
    assert!(matches!(
        no_file.submit(&client).await,
        Err(ScreenError::MissingInput)
    ));

    // Whitespace-only description
    let resume = stub_resume();
    let mut blank_desc = ScreeningSession::new();
    blank_desc.attach(resume.path()).unwrap();
    blank_desc.set_job_description("   \n");
    assert!(matches!(
        blank_desc.submit(&client).await,
        Err(ScreenError::MissingInput)
    ));

    mock.assert_async().await;
}

#[tokio::test]
async fn submit_refused_while_request_in_flight() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .expect(0)
        .create_async()
        .await;

    let config = ScreenerConfig::new(server.url());
    let client = ScreenerClient::new(&config).unwrap();

    let resume = stub_resume();
    let mut session = ScreeningSession::new();
    session.attach(resume.path()).unwrap();
    session.set_job_description("Senior Python developer");

    // Hold the session in Submitting, then try to submit again
    session.begin_submission().unwrap();
    assert!(matches!(
        session.submit(&client).await,
        Err(ScreenError::SubmissionInFlight)
    ));

    mock.assert_async().await;
}
