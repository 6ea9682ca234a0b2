use super::*;
use crate::progress::UPLOAD;

fn file(name: &str, mime: &str) -> SelectedFile {
    SelectedFile { name: name.to_owned(), mime: mime.to_owned(), size: 2_516_582 }
}

// =============================================================
// Outcome
// =============================================================

#[test]
fn new_upload_navigates_to_results() {
    let outcome = UploadOutcome::from_response(Ok(UploadResponse { id: "abc123".to_owned(), is_duplicate: false }));
    assert_eq!(outcome, UploadOutcome::Created("abc123".to_owned()));
    assert_eq!(outcome.destination().as_deref(), Some("/results/abc123"));
    assert_eq!(outcome.notice(), "Analysis complete! Redirecting...");
}

#[test]
fn duplicate_upload_shows_notice_and_navigates() {
    let outcome = UploadOutcome::from_response(Ok(UploadResponse { id: "abc123".to_owned(), is_duplicate: true }));
    assert_eq!(outcome, UploadOutcome::Duplicate("abc123".to_owned()));
    assert_eq!(outcome.destination().as_deref(), Some("/results/abc123"));
    assert!(outcome.notice().contains("already uploaded"));
    assert!(outcome.succeeded());
}

#[test]
fn decoded_duplicate_body_drives_the_same_outcome() {
    let body: UploadResponse = serde_json::from_str(r#"{"id":"abc123","is_duplicate":true}"#).expect("decode");
    let outcome = UploadOutcome::from_response(Ok(body));
    assert_eq!(outcome.destination().as_deref(), Some("/results/abc123"));
}

#[test]
fn failed_upload_has_no_destination() {
    let err = ApiError::from_status(400, r#"{"detail":"Only PDF files are supported"}"#);
    let outcome = UploadOutcome::from_response(Err(err));
    assert_eq!(outcome.destination(), None);
    assert_eq!(outcome.notice(), "Upload failed: Only PDF files are supported");
    assert!(!outcome.succeeded());
}

// =============================================================
// File selection
// =============================================================

#[test]
fn pdf_detection_uses_extension_or_mime() {
    assert!(file("tender.pdf", "").is_pdf());
    assert!(file("TENDER.PDF", "application/octet-stream").is_pdf());
    assert!(file("scan", "application/pdf").is_pdf());
    assert!(!file("notes.docx", "application/msword").is_pdf());
    assert!(!file("pdf", "").is_pdf());
}

#[test]
fn size_label_is_megabytes_with_two_decimals() {
    assert_eq!(file("a.pdf", PDF_MIME).size_label(), "2.40 MB");
    assert_eq!(format_megabytes(0), "0.00 MB");
}

// =============================================================
// Stage
// =============================================================

#[test]
fn stage_follows_tracker_progress() {
    let mut tracker = ProgressTracker::new(UPLOAD);
    assert_eq!(UploadStage::from_tracker(&tracker), UploadStage::Idle);

    let ticket = tracker.start().expect("start");
    assert_eq!(UploadStage::from_tracker(&tracker).message(), "Uploading PDF...");

    tracker.tick(ticket);
    assert_eq!(UploadStage::from_tracker(&tracker), UploadStage::Extracting);

    tracker.tick(ticket);
    tracker.tick(ticket);
    assert_eq!(UploadStage::from_tracker(&tracker), UploadStage::Analyzing);

    tracker.on_result(true);
    assert_eq!(UploadStage::from_tracker(&tracker).message(), "Complete!");
}
