pub mod config;
pub mod core;
pub mod utils;

pub use config::CliConfig;
pub use core::converter::{Converter, Outcome, RunSummary};
pub use utils::error::{ConvertError, Result};
