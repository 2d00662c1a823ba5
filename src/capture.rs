//! Upload capture: single-file selection with type and size gating

use log::debug;
use std::io::Read;
use std::path::Path;

/// Files above this size are rejected before any upload is attempted.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Pdf,
    Doc,
    Docx,
}

impl DocumentType {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(DocumentType::Pdf),
            "doc" => Some(DocumentType::Doc),
            "docx" => Some(DocumentType::Docx),
            _ => None,
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Declared MIME type sent with the upload.
    pub fn mime(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "application/pdf",
            DocumentType::Doc => "application/msword",
            DocumentType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// The one document held by the capture, read fully into memory.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub file_name: String,
    pub document_type: DocumentType,
    pub bytes: Vec<u8>,
}

/// Observable state of the capture surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureView {
    Empty,
    Selected,
    Disabled,
}

/// Holds at most one validated file. A new offer replaces the previous
/// selection; rejected offers leave the holder untouched and are only
/// reported through the debug log.
#[derive(Debug, Default)]
pub struct UploadCapture {
    selected: Option<SelectedFile>,
    disabled: bool,
}

impl UploadCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> CaptureView {
        if self.disabled {
            CaptureView::Disabled
        } else if self.selected.is_some() {
            CaptureView::Selected
        } else {
            CaptureView::Empty
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Disabled while a request is in flight; offers are ignored.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Offer a file from disk. Returns true when it was accepted.
    pub fn offer_path(&mut self, path: &Path) -> bool {
        if self.disabled {
            debug!("capture disabled, ignoring {}", path.display());
            return false;
        }

        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => {
                debug!("rejected {}: no usable file name", path.display());
                return false;
            }
        };

        let document_type = match DocumentType::from_file_name(&file_name) {
            Some(t) => t,
            None => {
                debug!("rejected {}: unsupported file type", file_name);
                return false;
            }
        };

        let size = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                debug!("rejected {}: cannot read metadata: {}", file_name, e);
                return false;
            }
        };
        if size > MAX_FILE_SIZE {
            debug!("rejected {}: {} bytes exceeds limit", file_name, size);
            return false;
        }

        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                debug!("rejected {}: read failed: {}", file_name, e);
                return false;
            }
        };

        self.selected = Some(SelectedFile {
            file_name,
            document_type,
            bytes,
        });
        true
    }

    /// Offer a document from a stream, with its name supplied separately.
    /// Reads at most one byte past the size limit to detect oversize input.
    pub fn offer_reader<R: Read>(&mut self, file_name: &str, reader: R) -> bool {
        if self.disabled {
            debug!("capture disabled, ignoring stream {}", file_name);
            return false;
        }

        let document_type = match DocumentType::from_file_name(file_name) {
            Some(t) => t,
            None => {
                debug!("rejected {}: unsupported file type", file_name);
                return false;
            }
        };

        let mut bytes = Vec::new();
        let mut limited = reader.take(MAX_FILE_SIZE + 1);
        if let Err(e) = limited.read_to_end(&mut bytes) {
            debug!("rejected {}: stream read failed: {}", file_name, e);
            return false;
        }
        if bytes.len() as u64 > MAX_FILE_SIZE {
            debug!("rejected {}: stream exceeds size limit", file_name);
            return false;
        }

        self.selected = Some(SelectedFile {
            file_name: file_name.to_string(),
            document_type,
            bytes,
        });
        true
    }

    /// Hand the held file to the submit callback. Does nothing when empty or
    /// disabled. The selection survives so a failed attempt can be retried.
    pub fn confirm<F, T>(&self, submit: F) -> Option<T>
    where
        F: FnOnce(&SelectedFile) -> T,
    {
        if self.disabled {
            return None;
        }
        self.selected.as_ref().map(submit)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection() {
        assert_eq!(DocumentType::from_extension("pdf"), Some(DocumentType::Pdf));
        assert_eq!(DocumentType::from_extension("PDF"), Some(DocumentType::Pdf));
        assert_eq!(DocumentType::from_extension("doc"), Some(DocumentType::Doc));
        assert_eq!(
            DocumentType::from_extension("docx"),
            Some(DocumentType::Docx)
        );
        assert_eq!(DocumentType::from_extension("txt"), None);
        assert_eq!(DocumentType::from_extension("exe"), None);
    }

    #[test]
    fn test_mime_mapping() {
        assert_eq!(DocumentType::Pdf.mime(), "application/pdf");
        assert_eq!(DocumentType::Doc.mime(), "application/msword");
        assert_eq!(
            DocumentType::Docx.mime(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn test_reader_accepts_small_docx() {
        let mut capture = UploadCapture::new();
        let data = vec![0u8; 1024];
        assert!(capture.offer_reader("resume.docx", data.as_slice()));
        assert_eq!(capture.view(), CaptureView::Selected);
        assert_eq!(capture.selected().unwrap().bytes.len(), 1024);
    }

    #[test]
    fn test_reader_rejects_oversize_stream() {
        let mut capture = UploadCapture::new();
        let data = vec![0u8; (MAX_FILE_SIZE + 1) as usize];
        assert!(!capture.offer_reader("resume.pdf", data.as_slice()));
        assert_eq!(capture.view(), CaptureView::Empty);
    }

    #[test]
    fn test_reader_rejects_unknown_extension() {
        let mut capture = UploadCapture::new();
        assert!(!capture.offer_reader("resume.txt", &b"hello"[..]));
        assert!(capture.selected().is_none());
    }

    #[test]
    fn test_disabled_capture_ignores_offers() {
        let mut capture = UploadCapture::new();
        capture.set_disabled(true);
        assert!(!capture.offer_reader("resume.pdf", &b"data"[..]));
        assert_eq!(capture.view(), CaptureView::Disabled);
    }

    #[test]
    fn test_confirm_noop_when_empty() {
        let capture = UploadCapture::new();
        let mut called = false;
        capture.confirm(|_| called = true);
        assert!(!called);
    }

    #[test]
    fn test_new_offer_replaces_selection() {
        let mut capture = UploadCapture::new();
        assert!(capture.offer_reader("first.pdf", &b"one"[..]));
        assert!(capture.offer_reader("second.docx", &b"two"[..]));
        assert_eq!(capture.selected().unwrap().file_name, "second.docx");
    }

    #[test]
    fn test_clear_returns_to_empty() {
        let mut capture = UploadCapture::new();
        assert!(capture.offer_reader("resume.pdf", &b"data"[..]));
        capture.clear();
        assert_eq!(capture.view(), CaptureView::Empty);
        assert!(capture.selected().is_none());
    }
}
