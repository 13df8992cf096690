use crate::api::ClassificationResult;
use std::fmt;

/// Text report formatter for a classification result
pub struct TextReport<'a> {
    result: &'a ClassificationResult,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(result: &'a ClassificationResult) -> Self {
        Self { result }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Series Classification")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;

        for group in self.result.groups() {
            writeln!(
                f,
                "{:<12} {} series",
                group.category.simple_name(),
                group.descriptors.len()
            )?;
            writeln!(f, "  template: {}", group.key.template)?;
            for descriptor in &group.descriptors {
                writeln!(f, "  - {}", descriptor)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Total classified: {}", self.result.total_classified())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SeriesClassifier;
    use crate::types::SeriesInfo;

    #[test]
    fn test_text_report_format() {
        let series = vec![
            SeriesInfo::new("2", "T1w_MPR", "T1w_MPR"),
            SeriesInfo::new("7", "fmri_rest1_ap", "bold"),
        ];
        let result = SeriesClassifier::classify(&series).unwrap();
        let output = format!("{}", TextReport::new(&result));

        assert!(output.contains("Series Classification"));
        assert!(output.contains("t1w"));
        assert!(output.contains("template: sub-{subject}/anat/sub-{subject}_T1w"));
        assert!(output.contains("- 7 task=rest dir=AP run=1"));
        assert!(output.contains("Total classified: 2"));
    }

    #[test]
    fn test_text_report_empty_categories_listed() {
        let result = SeriesClassifier::classify(&[]).unwrap();
        let output = format!("{}", TextReport::new(&result));

        assert!(output.contains("dwi_sbref"));
        assert!(output.contains("0 series"));
        assert!(output.contains("Total classified: 0"));
    }
}
