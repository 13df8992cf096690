//! Core type definitions for series classification
//!
//! This module provides the fundamental types used throughout the bidscat library:
//! - [`SeriesCategory`]: the closed set of BIDS output categories
//! - [`TemplateKey`]: an output-path template paired with its output formats
//! - [`Descriptor`]: the per-series payload recorded against a template key
//! - [`SeriesInfo`]: one scanner series as handed over by the host pipeline

mod descriptor;
mod enums;
mod record;
mod template;

pub use descriptor::Descriptor;
pub use enums::SeriesCategory;
pub use record::SeriesInfo;
pub use template::{TemplateKey, DEFAULT_OUTPUT_FORMAT};
