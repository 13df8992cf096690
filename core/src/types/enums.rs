use std::fmt;

/// BIDS output category for a classified series
///
/// The category set is closed: every classification result carries exactly
/// these seven categories, in the order of [`SeriesCategory::ALL`], whether
/// or not any series matched them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum SeriesCategory {
    /// T1-weighted anatomical (MPRAGE family)
    T1w,
    /// T2-weighted anatomical (SPC family)
    T2w,
    /// Spin-echo field map
    FieldMap,
    /// Functional BOLD run
    Bold,
    /// Single-band reference paired with a BOLD run
    BoldReference,
    /// Diffusion-weighted run
    Dwi,
    /// Single-band reference paired with a diffusion run
    DwiReference,
}

impl SeriesCategory {
    /// All categories, in the fixed key order of a classification result
    pub const ALL: [SeriesCategory; 7] = [
        SeriesCategory::T1w,
        SeriesCategory::T2w,
        SeriesCategory::FieldMap,
        SeriesCategory::Bold,
        SeriesCategory::BoldReference,
        SeriesCategory::Dwi,
        SeriesCategory::DwiReference,
    ];

    /// Returns the BIDS output-path template for this category
    ///
    /// Templates are format strings rendered by the host pipeline; the
    /// placeholders they carry are exactly the ones listed by
    /// [`SeriesCategory::placeholders`], plus the host-supplied `subject`.
    pub fn template(&self) -> &'static str {
        match self {
            SeriesCategory::T1w => "sub-{subject}/anat/sub-{subject}_T1w",
            SeriesCategory::T2w => "sub-{subject}/anat/sub-{subject}_T2w",
            SeriesCategory::FieldMap => "sub-{subject}/fmap/sub-{subject}_dir-{dir}_epi",
            SeriesCategory::Bold => {
                "sub-{subject}/func/sub-{subject}_task-{task}_dir-{dir}_run-{run:02d}_bold"
            }
            SeriesCategory::BoldReference => {
                "sub-{subject}/func/sub-{subject}_task-{task}_dir-{dir}_run-{run:02d}_sbref"
            }
            SeriesCategory::Dwi => "sub-{subject}/dwi/sub-{subject}_acq-{acq}_dir-{dir}_dwi",
            SeriesCategory::DwiReference => {
                "sub-{subject}/dwi/sub-{subject}_acq-{acq}_dir-{dir}_sbref"
            }
        }
    }

    /// Placeholder names a descriptor for this category may carry
    pub fn placeholders(&self) -> &'static [&'static str] {
        match self {
            SeriesCategory::T1w | SeriesCategory::T2w => &[],
            SeriesCategory::Bold | SeriesCategory::BoldReference => {
                &["item", "task", "dir", "run"]
            }
            SeriesCategory::Dwi | SeriesCategory::DwiReference => &["item", "acq", "dir"],
            SeriesCategory::FieldMap => &["item", "dir"],
        }
    }

    /// Returns whether this is a reference-scan category
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            SeriesCategory::BoldReference | SeriesCategory::DwiReference
        )
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            SeriesCategory::T1w => "t1w",
            SeriesCategory::T2w => "t2w",
            SeriesCategory::FieldMap => "fmap",
            SeriesCategory::Bold => "bold",
            SeriesCategory::BoldReference => "bold_sbref",
            SeriesCategory::Dwi => "dwi",
            SeriesCategory::DwiReference => "dwi_sbref",
        }
    }
}

impl fmt::Display for SeriesCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_category_once() {
        assert_eq!(SeriesCategory::ALL.len(), 7);
        for (i, a) in SeriesCategory::ALL.iter().enumerate() {
            for b in &SeriesCategory::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_key_order() {
        assert_eq!(SeriesCategory::ALL[0], SeriesCategory::T1w);
        assert_eq!(SeriesCategory::ALL[2], SeriesCategory::FieldMap);
        assert_eq!(SeriesCategory::ALL[6], SeriesCategory::DwiReference);
    }

    #[test]
    fn test_templates_carry_declared_placeholders() {
        for category in SeriesCategory::ALL {
            let template = category.template();
            assert!(!template.is_empty());
            for name in category.placeholders() {
                if *name == "item" {
                    // `item` indexes within the category; it never appears in the path
                    continue;
                }
                assert!(
                    template.contains(&format!("{{{}", name)),
                    "{} template missing {{{}}}",
                    category,
                    name
                );
            }
        }
    }

    #[test]
    fn test_reference_categories() {
        assert!(SeriesCategory::BoldReference.is_reference());
        assert!(SeriesCategory::DwiReference.is_reference());
        assert!(!SeriesCategory::Bold.is_reference());
        assert!(!SeriesCategory::FieldMap.is_reference());
    }

    #[test]
    fn test_display() {
        assert_eq!(SeriesCategory::T1w.to_string(), "t1w");
        assert_eq!(SeriesCategory::BoldReference.to_string(), "bold_sbref");
    }
}
