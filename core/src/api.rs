use crate::classify::{evaluate, RuleOutcome};
use crate::error::Result;
use crate::types::{Descriptor, SeriesCategory, SeriesInfo, TemplateKey};
use log::debug;

/// Builds a template key with the default `nii.gz` output format
///
/// # Errors
///
/// Returns [`crate::BidscatError::InvalidTemplate`] for an empty or absent
/// template; the host should treat that as a startup-configuration error.
///
/// # Example
///
/// ```
/// use bidscat_core::create_key;
///
/// let key = create_key(Some("sub-{subject}/anat/sub-{subject}_T1w")).unwrap();
/// assert_eq!(key.template, "sub-{subject}/anat/sub-{subject}_T1w");
/// assert_eq!(key.output_formats, vec!["nii.gz".to_string()]);
///
/// assert!(create_key(None).is_err());
/// assert!(create_key(Some("")).is_err());
/// ```
pub fn create_key(template: Option<&str>) -> Result<TemplateKey> {
    TemplateKey::with_defaults(template.unwrap_or_default())
}

/// One category's slot in a classification result
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct CategoryGroup {
    pub category: SeriesCategory,
    pub key: TemplateKey,
    pub descriptors: Vec<Descriptor>,
}

/// Classification output: every category's template key with the series
/// descriptors filed under it
///
/// All seven categories are always present, in [`SeriesCategory::ALL`]
/// order, with empty descriptor lists for categories nothing matched.
/// Descriptors keep the input scan order within each category.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct ClassificationResult {
    groups: Vec<CategoryGroup>,
}

impl ClassificationResult {
    /// Pre-builds the fixed set of template keys with empty lists
    fn empty() -> Result<Self> {
        let groups = SeriesCategory::ALL
            .iter()
            .map(|&category| {
                Ok(CategoryGroup {
                    category,
                    key: TemplateKey::with_defaults(category.template())?,
                    descriptors: Vec::new(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { groups })
    }

    /// All category groups, in fixed key order
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Template key for one category
    pub fn key(&self, category: SeriesCategory) -> &TemplateKey {
        &self.group(category).key
    }

    /// Descriptors filed under one category, in input scan order
    pub fn descriptors(&self, category: SeriesCategory) -> &[Descriptor] {
        &self.group(category).descriptors
    }

    /// Total number of classified series across all categories
    pub fn total_classified(&self) -> usize {
        self.groups.iter().map(|g| g.descriptors.len()).sum()
    }

    fn group(&self, category: SeriesCategory) -> &CategoryGroup {
        // ALL covers every variant, so the lookup cannot miss
        self.groups
            .iter()
            .find(|g| g.category == category)
            .expect("all categories present")
    }

    fn push(&mut self, category: SeriesCategory, descriptor: Descriptor) {
        debug_assert!(descriptor.matches_category(category));
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.category == category)
            .expect("all categories present");
        group.descriptors.push(descriptor);
    }
}

/// Classifier for scanner series sequences
///
/// A single linear pass over the input: each series is tested against the
/// priority-ordered rule table and filed under at most one category.
///
/// # Example
///
/// ```
/// use bidscat_core::{SeriesCategory, SeriesClassifier, SeriesInfo};
///
/// let series = vec![
///     SeriesInfo::new("2", "T1w_MPR", "T1w_MPR"),
///     SeriesInfo::new("7", "fmri_rest1_ap", "bold"),
/// ];
/// let result = SeriesClassifier::classify(&series).unwrap();
///
/// assert_eq!(result.descriptors(SeriesCategory::T1w).len(), 1);
/// assert_eq!(result.descriptors(SeriesCategory::Bold).len(), 1);
/// assert!(result.descriptors(SeriesCategory::Dwi).is_empty());
/// ```
pub struct SeriesClassifier;

impl SeriesClassifier {
    /// Classifies a sequence of series into the fixed category set
    ///
    /// # Errors
    ///
    /// Fails the whole batch with
    /// [`crate::BidscatError::MalformedProtocolName`] when a matched series
    /// has a protocol name that does not parse into the expected fields; the
    /// error carries the offending series id.
    pub fn classify(series: &[SeriesInfo]) -> Result<ClassificationResult> {
        let mut result = ClassificationResult::empty()?;

        for s in series {
            // Marker matching is case-insensitive; flags keep scanner casing
            let protocol_name = s.protocol_name.to_lowercase();
            let description = s.series_description.to_lowercase();

            match evaluate(s, &protocol_name, &description)? {
                RuleOutcome::Classified(category, descriptor) => {
                    debug!("series {} -> {}", s.series_id, category);
                    result.push(category, descriptor);
                }
                RuleOutcome::Skip => {
                    debug!("series {} excluded ({})", s.series_id, s.protocol_name);
                }
                RuleOutcome::NoMatch => {
                    debug!("series {} unmatched ({})", s.series_id, s.protocol_name);
                }
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BidscatError;

    #[test]
    fn test_empty_input_keeps_all_keys() {
        let result = SeriesClassifier::classify(&[]).unwrap();
        assert_eq!(result.groups().len(), 7);
        for group in result.groups() {
            assert!(group.descriptors.is_empty());
            assert_eq!(group.key.template, group.category.template());
        }
        assert_eq!(result.total_classified(), 0);
    }

    #[test]
    fn test_order_preserved_within_category() {
        let series = vec![
            SeriesInfo::new("a", "fmri_rest1_ap", "bold"),
            SeriesInfo::new("b", "dmri_b2000_pa", "dmri"),
            SeriesInfo::new("c", "fmri_rest2_pa", "bold"),
            SeriesInfo::new("d", "fmri_task1_ap", "bold"),
        ];
        let result = SeriesClassifier::classify(&series).unwrap();
        let items: Vec<&str> = result
            .descriptors(SeriesCategory::Bold)
            .iter()
            .map(|d| d.item())
            .collect();
        assert_eq!(items, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_mutual_exclusivity() {
        let series = vec![
            SeriesInfo::new("2", "T1w_MPR", "T1w_MPR"),
            SeriesInfo::new("7", "fmri_rest1_ap", "bold"),
            SeriesInfo::new("9", "dmri_b1000_ap", "dmri"),
            SeriesInfo::new("11", "SpinEchoFieldMap_AP", "fmap"),
        ];
        let result = SeriesClassifier::classify(&series).unwrap();
        assert_eq!(result.total_classified(), series.len());
        for s in &series {
            let owners = result
                .groups()
                .iter()
                .filter(|g| g.descriptors.iter().any(|d| d.item() == s.series_id))
                .count();
            assert_eq!(owners, 1, "series {} owned by {} categories", s.series_id, owners);
        }
    }

    #[test]
    fn test_normalized_anatomical_contributes_nowhere() {
        let series =
            vec![SeriesInfo::new("3", "T1w_MPR", "T1w_MPR_ND_NORM").with_image_type(&["NORM"])];
        let result = SeriesClassifier::classify(&series).unwrap();
        assert_eq!(result.total_classified(), 0);
    }

    #[test]
    fn test_functional_reference_example() {
        let series = vec![SeriesInfo::new("8", "fmri_task2_pa", "fmri sbref")];
        let result = SeriesClassifier::classify(&series).unwrap();
        assert_eq!(
            result.descriptors(SeriesCategory::BoldReference),
            &[Descriptor::Functional {
                item: "8".to_string(),
                task: "task".to_string(),
                dir: "PA".to_string(),
                run: 2,
            }]
        );
        assert!(result.descriptors(SeriesCategory::Bold).is_empty());
    }

    #[test]
    fn test_case_insensitive_matching_uppercases_dir() {
        let upper = vec![SeriesInfo::new("7", "FMRI_REST1_AP", "BOLD")];
        let lower = vec![SeriesInfo::new("7", "fmri_rest1_ap", "bold")];
        let a = SeriesClassifier::classify(&upper).unwrap();
        let b = SeriesClassifier::classify(&lower).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.descriptors(SeriesCategory::Bold)[0].dir(),
            Some("AP")
        );
    }

    #[test]
    fn test_second_field_map_variant_dropped() {
        let series = vec![
            SeriesInfo::new("11", "SpinEchoFieldMap_AP", "fmap"),
            SeriesInfo::new("12", "SpinEchoFieldMap2_AP", "fmap"),
        ];
        let result = SeriesClassifier::classify(&series).unwrap();
        assert_eq!(result.descriptors(SeriesCategory::FieldMap).len(), 1);
        assert_eq!(result.total_classified(), 1);
    }

    #[test]
    fn test_malformed_name_fails_batch_with_series_id() {
        let series = vec![
            SeriesInfo::new("7", "fmri_rest1_ap", "bold"),
            SeriesInfo::new("8", "fmri_rest1_ap_extra", "bold"),
        ];
        let err = SeriesClassifier::classify(&series).unwrap_err();
        assert!(matches!(
            err,
            BidscatError::MalformedProtocolName { .. }
        ));
        assert_eq!(err.series_id(), Some("8"));
    }

    #[test]
    fn test_create_key_properties() {
        let key = create_key(Some("sub-{subject}/dwi/sub-{subject}_acq-{acq}_dir-{dir}_dwi"))
            .unwrap();
        assert_eq!(
            key.template,
            "sub-{subject}/dwi/sub-{subject}_acq-{acq}_dir-{dir}_dwi"
        );
        assert!(matches!(
            create_key(None).unwrap_err(),
            BidscatError::InvalidTemplate
        ));
    }
}
