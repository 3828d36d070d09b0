use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "convert")]
#[command(about = "Recursively convert PNG images to WEBP, mirroring the directory tree")]
pub struct CliConfig {
    /// Root directory scanned for PNG files
    pub source_dir: PathBuf,

    /// Root directory where mirrored WEBP files are written
    pub output_dir: PathBuf,

    #[arg(long, default_value_t = 80.0, help = "WEBP quality (0-100)")]
    pub quality: f32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source_dir", &self.source_dir)?;
        validation::validate_path("output_dir", &self.output_dir)?;
        validation::validate_range("quality", self.quality, 0.0, 100.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(quality: f32) -> CliConfig {
        CliConfig {
            source_dir: PathBuf::from("./images"),
            output_dir: PathBuf::from("./webp"),
            quality,
            verbose: false,
        }
    }

    #[test]
    fn test_default_quality_is_valid() {
        assert!(config(80.0).validate().is_ok());
    }

    #[test]
    fn test_quality_out_of_range_rejected() {
        assert!(config(100.5).validate().is_err());
        assert!(config(-3.0).validate().is_err());
    }

    #[test]
    fn test_empty_source_dir_rejected() {
        let mut config = config(80.0);
        config.source_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
