//! Integration tests for the upload capture gate

use cv_rater::capture::{CaptureView, UploadCapture, MAX_FILE_SIZE};
use std::io::Write;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, size: usize) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&vec![0u8; size]).unwrap();
    path
}

#[test]
fn test_oversize_pdf_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "big.pdf", 6 * 1024 * 1024);

    let mut capture = UploadCapture::new();
    assert!(!capture.offer_path(&path));
    assert_eq!(capture.view(), CaptureView::Empty);
    assert!(capture.selected().is_none());
}

#[test]
fn test_small_docx_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "resume.docx", 1024 * 1024);

    let mut capture = UploadCapture::new();
    assert!(capture.offer_path(&path));
    assert_eq!(capture.view(), CaptureView::Selected);

    let selected = capture.selected().unwrap();
    assert_eq!(selected.file_name, "resume.docx");
    assert_eq!(selected.bytes.len(), 1024 * 1024);
    assert_eq!(
        selected.document_type.mime(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
}

#[test]
fn test_file_at_exact_limit_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "exact.pdf", MAX_FILE_SIZE as usize);

    let mut capture = UploadCapture::new();
    assert!(capture.offer_path(&path));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "resume.txt", 128);

    let mut capture = UploadCapture::new();
    assert!(!capture.offer_path(&path));
    assert!(capture.selected().is_none());
}

#[test]
fn test_nonexistent_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.pdf");

    let mut capture = UploadCapture::new();
    assert!(!capture.offer_path(&path));
    assert_eq!(capture.view(), CaptureView::Empty);
}

#[test]
fn test_rejection_never_reaches_the_callback() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "notes.md", 64);

    let mut capture = UploadCapture::new();
    capture.offer_path(&path);

    let mut invoked = false;
    capture.confirm(|_| invoked = true);
    assert!(!invoked);
}

#[test]
fn test_disabled_capture_keeps_previous_selection() {
    let dir = TempDir::new().unwrap();
    let first = write_file(&dir, "first.pdf", 512);
    let second = write_file(&dir, "second.doc", 512);

    let mut capture = UploadCapture::new();
    assert!(capture.offer_path(&first));
    capture.set_disabled(true);
    assert!(!capture.offer_path(&second));
    assert_eq!(capture.view(), CaptureView::Disabled);

    capture.set_disabled(false);
    assert_eq!(capture.selected().unwrap().file_name, "first.pdf");
}
