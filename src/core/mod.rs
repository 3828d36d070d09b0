pub mod converter;
pub mod encoder;

pub use converter::{Converter, Outcome, RunSummary};
pub use crate::utils::error::Result;
