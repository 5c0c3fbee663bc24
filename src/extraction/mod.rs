//! Document text extraction
//!
//! Uploads are routed to a parser by file suffix. The set of formats is
//! closed: [`DocumentFormat::from_filename`] resolves every name to one of
//! the supported parsers or to [`DocumentFormat::Unsupported`], and every
//! parser shares the same `bytes -> text` contract.

pub mod docx;
pub mod pdf;
pub mod text;
pub mod processor;

pub use processor::DocumentProcessor;

/// Failure inside a single parser.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{0}")]
    Docx(String),

    #[error("{0}")]
    Pdf(#[from] lopdf::Error),

    #[error("{0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    Pdf,
    Txt,
    Unsupported,
}

impl DocumentFormat {
    /// Case-insensitive suffix match on the uploaded file name.
    pub fn from_filename(filename: &str) -> Self {
        let name = filename.to_lowercase();
        if name.ends_with(".docx") {
            DocumentFormat::Docx
        } else if name.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if name.ends_with(".txt") {
            DocumentFormat::Txt
        } else {
            DocumentFormat::Unsupported
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, DocumentFormat::Unsupported)
    }

    /// Run the parser for this format. `Unsupported` yields `None`.
    pub fn extract(&self, bytes: &[u8]) -> Option<Result<String, ParseError>> {
        match self {
            DocumentFormat::Docx => Some(docx::extract(bytes)),
            DocumentFormat::Pdf => Some(pdf::extract(bytes)),
            DocumentFormat::Txt => Some(text::extract(bytes)),
            DocumentFormat::Unsupported => None,
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Docx => write!(f, "docx"),
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Txt => write!(f, "txt"),
            DocumentFormat::Unsupported => write!(f, "unsupported"),
        }
    }
}
