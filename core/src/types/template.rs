use crate::error::{BidscatError, Result};
use std::fmt;

/// Default output format for every template key
pub const DEFAULT_OUTPUT_FORMAT: &str = "nii.gz";

/// Output-path template paired with its allowed output formats
///
/// Mirrors the host pipeline's key tuple: (template, output formats,
/// reserved annotation-classes slot). Identity is by value, so two keys
/// built from the same arguments compare equal and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct TemplateKey {
    pub template: String,
    pub output_formats: Vec<String>,
    /// Reserved slot; always `None` in this system
    pub annotation_classes: Option<Vec<String>>,
}

impl TemplateKey {
    /// Creates a new TemplateKey
    ///
    /// # Errors
    ///
    /// Returns [`BidscatError::InvalidTemplate`] when `template` is empty.
    pub fn new(
        template: String,
        output_formats: Vec<String>,
        annotation_classes: Option<Vec<String>>,
    ) -> Result<Self> {
        if template.is_empty() {
            return Err(BidscatError::InvalidTemplate);
        }
        Ok(Self {
            template,
            output_formats,
            annotation_classes,
        })
    }

    /// Creates a key with the default `nii.gz` output format and no
    /// annotation classes
    pub fn with_defaults(template: &str) -> Result<Self> {
        Self::new(
            template.to_string(),
            vec![DEFAULT_OUTPUT_FORMAT.to_string()],
            None,
        )
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.template, self.output_formats.join(", "))
    }
}
