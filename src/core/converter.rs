use crate::config::CliConfig;
use crate::core::encoder;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Per-file result; failures are absorbed into the run summary instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Converted,
    Skipped,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub struct Converter {
    config: CliConfig,
}

impl Converter {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Walk the source tree and convert every PNG file that has no
    /// destination yet. A failing file is logged and counted, never fatal.
    pub fn run(&self) -> Result<RunSummary> {
        if !self.config.source_dir.exists() {
            return Err(ConvertError::MissingSourceDir {
                path: self.config.source_dir.display().to_string(),
            });
        }

        let mut summary = RunSummary::default();

        for entry in WalkDir::new(&self.config.source_dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::error!("Failed to read directory entry: {}", e);
                    summary.failed += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_png(entry.path()) {
                continue;
            }

            match self.convert_file(entry.path()) {
                Ok(Outcome::Converted) => summary.converted += 1,
                Ok(Outcome::Skipped) => summary.skipped += 1,
                Err(e) => {
                    tracing::error!("Failed to convert {}: {}", entry.path().display(), e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    fn convert_file(&self, source: &Path) -> Result<Outcome> {
        let destination = self.destination_path(source);

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }

        if destination.exists() {
            tracing::info!("{} already exists, skipping", destination.display());
            return Ok(Outcome::Skipped);
        }

        let data = encoder::encode_webp(source, self.config.quality)?;
        fs::write(&destination, data)?;
        tracing::info!(
            "Converted: {} -> {}",
            source.display(),
            destination.display()
        );

        Ok(Outcome::Converted)
    }

    /// Map a source file into the output tree, preserving the directory
    /// structure relative to `source_dir` and swapping the extension.
    fn destination_path(&self, source: &Path) -> PathBuf {
        let relative = source
            .strip_prefix(&self.config.source_dir)
            .unwrap_or(source);
        self.config.output_dir.join(relative).with_extension("webp")
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "png")
}
