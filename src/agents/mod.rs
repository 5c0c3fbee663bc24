//! Agent System
//!
//! Prompt assembly and model calls behind the HTTP handlers:
//!
//! - **Formatter Agent**: restyles a content document after a sample document,
//!   carrying the running conversation with the user
//! - **Analyzer Agent**: describes the structural "DNA" of a single document
//!
//! ```text
//! GenerateRequest ──► context block + translated history ──► Gemini ──► GenerateResponse
//! AnalyzeRequest  ──► analysis prompt                     ──► Gemini ──► AnalyzeResponse
//! ```

pub mod formatter;
pub mod analyzer;

pub use formatter::FormatterAgent;
pub use analyzer::AnalyzerAgent;
