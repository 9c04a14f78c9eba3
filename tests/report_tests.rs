use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{StubResponse, StubServer, chemeq, setup_home, write_session};

#[test]
fn test_report_saves_pdf_bytes() {
    let home = setup_home("report_saves_pdf");
    write_session(&home, "abc123", "alice");
    let out = PathBuf::from(&home).join("analysis.pdf");
    let server = StubServer::start(vec![StubResponse::pdf(b"%PDF-1.4 stub report")]);

    chemeq(&home)
        .args([
            "--api-url",
            &server.api_url(),
            "report",
            "7",
            "--out",
            &out.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("PDF report saved to"));

    let bytes = fs::read(&out).expect("read saved pdf");
    assert_eq!(bytes, b"%PDF-1.4 stub report");

    let requests = server.requests();
    assert_eq!(requests[0].path, "/api/summary/7/pdf/");
    assert_eq!(requests[0].authorization.as_deref(), Some("Token abc123"));
}

#[test]
fn test_report_defaults_to_report_id_pdf() {
    let home = setup_home("report_default_name");
    write_session(&home, "abc123", "alice");
    let server = StubServer::start(vec![StubResponse::pdf(b"%PDF-1.4 stub")]);

    chemeq(&home)
        .current_dir(&home)
        .args(["--api-url", &server.api_url(), "report", "5"])
        .assert()
        .success();

    assert!(PathBuf::from(&home).join("report_5.pdf").exists());
}

#[test]
fn test_failed_download_writes_no_file() {
    let home = setup_home("report_failed_download");
    write_session(&home, "abc123", "alice");
    let out = PathBuf::from(&home).join("analysis.pdf");
    // error body without an `error` field falls back to the generic message
    let server = StubServer::start(vec![StubResponse::json(500, "{}")]);

    chemeq(&home)
        .args([
            "--api-url",
            &server.api_url(),
            "report",
            "7",
            "--out",
            &out.to_string_lossy(),
        ])
        .assert()
        .failure()
        .stderr(contains("Failed to download PDF"));

    assert!(!out.exists());
}

#[test]
fn test_failed_download_message_ignores_response_body() {
    let home = setup_home("report_generic_message");
    write_session(&home, "abc123", "alice");
    let out = PathBuf::from(&home).join("analysis.pdf");
    let server = StubServer::start(vec![StubResponse::json(
        404,
        r#"{"error": "Summary not found"}"#,
    )]);

    chemeq(&home)
        .args([
            "--api-url",
            &server.api_url(),
            "report",
            "99",
            "--out",
            &out.to_string_lossy(),
        ])
        .assert()
        .failure()
        .stderr(contains("Failed to download PDF"))
        .stderr(contains("Summary not found").not());

    assert!(!out.exists());
}

#[test]
fn test_existing_output_requires_force() {
    let home = setup_home("report_existing_output");
    write_session(&home, "abc123", "alice");
    let out = PathBuf::from(&home).join("analysis.pdf");
    fs::write(&out, b"old content").expect("write existing file");
    let server = StubServer::start(vec![]);

    chemeq(&home)
        .args([
            "--api-url",
            &server.api_url(),
            "report",
            "7",
            "--out",
            &out.to_string_lossy(),
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    // nothing was fetched, nothing was overwritten
    assert!(server.requests().is_empty());
    assert_eq!(fs::read(&out).unwrap(), b"old content");
}

#[test]
fn test_force_overwrites_existing_output() {
    let home = setup_home("report_force_overwrite");
    write_session(&home, "abc123", "alice");
    let out = PathBuf::from(&home).join("analysis.pdf");
    fs::write(&out, b"old content").expect("write existing file");
    let server = StubServer::start(vec![StubResponse::pdf(b"%PDF-1.4 fresh")]);

    chemeq(&home)
        .args([
            "--api-url",
            &server.api_url(),
            "report",
            "7",
            "--out",
            &out.to_string_lossy(),
            "--force",
        ])
        .assert()
        .success();

    assert_eq!(fs::read(&out).unwrap(), b"%PDF-1.4 fresh");
}
