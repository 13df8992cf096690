use crate::types::SeriesCategory;
use std::fmt;

/// Per-series payload appended to a category's list
///
/// Anatomical categories record only the series identifier; the other
/// categories record the naming parameters parsed out of the protocol name.
/// The variant shapes are closed, so a descriptor can never carry a
/// placeholder its category does not declare.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum Descriptor {
    /// Bare series identifier (T1w/T2w)
    Bare(String),
    /// Functional run parameters (Bold/BoldReference)
    Functional {
        item: String,
        task: String,
        dir: String,
        run: u32,
    },
    /// Diffusion run parameters (Dwi/DwiReference)
    Diffusion {
        item: String,
        acq: String,
        dir: String,
    },
    /// Field-map parameters (FieldMap)
    FieldMap { item: String, dir: String },
}

impl Descriptor {
    /// Series identifier this descriptor was built from
    pub fn item(&self) -> &str {
        match self {
            Descriptor::Bare(item) => item,
            Descriptor::Functional { item, .. } => item,
            Descriptor::Diffusion { item, .. } => item,
            Descriptor::FieldMap { item, .. } => item,
        }
    }

    /// Phase-encoding direction, for the variants that carry one
    pub fn dir(&self) -> Option<&str> {
        match self {
            Descriptor::Bare(_) => None,
            Descriptor::Functional { dir, .. } => Some(dir),
            Descriptor::Diffusion { dir, .. } => Some(dir),
            Descriptor::FieldMap { dir, .. } => Some(dir),
        }
    }

    /// Returns whether this descriptor shape belongs under `category`
    pub fn matches_category(&self, category: SeriesCategory) -> bool {
        match self {
            Descriptor::Bare(_) => {
                matches!(category, SeriesCategory::T1w | SeriesCategory::T2w)
            }
            Descriptor::Functional { .. } => {
                matches!(category, SeriesCategory::Bold | SeriesCategory::BoldReference)
            }
            Descriptor::Diffusion { .. } => {
                matches!(category, SeriesCategory::Dwi | SeriesCategory::DwiReference)
            }
            Descriptor::FieldMap { .. } => matches!(category, SeriesCategory::FieldMap),
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Bare(item) => write!(f, "{}", item),
            Descriptor::Functional {
                item,
                task,
                dir,
                run,
            } => write!(f, "{} task={} dir={} run={}", item, task, dir, run),
            Descriptor::Diffusion { item, acq, dir } => {
                write!(f, "{} acq={} dir={}", item, acq, dir)
            }
            Descriptor::FieldMap { item, dir } => write!(f, "{} dir={}", item, dir),
        }
    }
}
