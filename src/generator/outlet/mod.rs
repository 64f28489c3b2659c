use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::export::{ExportError, ExportFormat};
use crate::store::ResultStore;

/// 保存结果
#[derive(Debug, Default, PartialEq)]
pub struct SaveReport {
    pub written: Vec<PathBuf>,
    /// 因能力缺失而跳过的格式
    pub skipped: Vec<ExportFormat>,
}

pub trait Outlet {
    fn save(&self, store: &ResultStore) -> Result<SaveReport>;
}

pub struct DiskOutlet {
    output_path: PathBuf,
    formats: Vec<ExportFormat>,
    title: String,
}

impl DiskOutlet {
    pub fn new(output_path: PathBuf, formats: Vec<ExportFormat>, title: impl Into<String>) -> Self {
        let mut unique = Vec::new();
        for format in formats {
            if !unique.contains(&format) {
                unique.push(format);
            }
        }
        Self {
            output_path,
            formats: unique,
            title: title.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.output_path.clone(),
            config.formats.clone(),
            config.report_title.clone(),
        )
    }
}

impl Outlet for DiskOutlet {
    fn save(&self, store: &ResultStore) -> Result<SaveReport> {
        let mut report = SaveReport::default();
        if store.is_empty() {
            println!("ℹ️ No results to export.");
            return Ok(report);
        }

        println!("\n📥 Exporting your startup report...");
        fs::create_dir_all(&self.output_path).context(format!(
            "Failed to create output directory: {:?}",
            self.output_path
        ))?;

        for format in &self.formats {
            let bytes = match format.render(store, &self.title) {
                Ok(bytes) => bytes,
                Err(ExportError::Unavailable) => {
                    println!(
                        "🧱 PDF export is not available in this build (enable the `pdf` feature); skipping {}",
                        format.file_name()
                    );
                    report.skipped.push(*format);
                    continue;
                }
                Err(e) => {
                    return Err(e).context(format!("Failed to export {}", format.file_name()));
                }
            };

            let output_file_path = self.output_path.join(format.file_name());
            fs::write(&output_file_path, bytes)
                .context(format!("Failed to write {:?}", output_file_path))?;

            println!(
                "💾 Saved {} ({})",
                output_file_path.display(),
                format.mime_type()
            );
            report.written.push(output_file_path);
        }

        println!("💾 Export finished, output directory: {}", self.output_path.display());
        Ok(report)
    }
}
