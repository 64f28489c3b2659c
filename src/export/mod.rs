//! 报告导出：Markdown / JSON / PDF

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

use crate::config::ConfigError;
use crate::store::ResultStore;

mod json;
mod markdown;
pub mod pdf;

pub use json::{from_json, to_json};
pub use markdown::to_markdown;
pub use pdf::{pdf_available, to_pdf};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF export is unavailable: rebuild with the `pdf` feature enabled")]
    Unavailable,

    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to render PDF: {0}")]
    Render(String),
}

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[serde(alias = "md")]
    Markdown,
    Json,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Markdown, ExportFormat::Json, ExportFormat::Pdf];

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "startup_report.md",
            ExportFormat::Json => "startup_data.json",
            ExportFormat::Pdf => "startup_report.pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Json => "application/json",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// 将报告导出为该格式的字节
    pub fn render(&self, store: &ResultStore, title: &str) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Markdown => Ok(to_markdown(store, title).into_bytes()),
            ExportFormat::Json => to_json(store),
            ExportFormat::Pdf => to_pdf(store),
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}
