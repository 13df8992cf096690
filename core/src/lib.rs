pub mod api;
pub mod classify;
pub mod cli;
pub mod error;
#[cfg(feature = "python")]
pub mod python;
pub mod types;

pub use api::{create_key, CategoryGroup, ClassificationResult, SeriesClassifier};
pub use cli::report::TextReport;
pub use error::{BidscatError, Result};
pub use types::*;
