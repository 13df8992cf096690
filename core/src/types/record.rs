/// One scanner series as handed over by the host pipeline
///
/// The host extracts these fields from the acquisition metadata before
/// classification; the core never mutates a record and forwards
/// `series_id` to the output unchanged, without interpreting it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesInfo {
    /// Opaque scanner-assigned series identifier
    pub series_id: String,

    /// Operator-defined protocol name, underscore-delimited tokens
    pub protocol_name: String,

    /// Free-text series description
    pub series_description: String,

    /// ImageType flag tokens, verbatim from the scanner
    #[cfg_attr(feature = "json", serde(default))]
    pub image_type: Vec<String>,
}

impl SeriesInfo {
    /// Creates a record with no image-type flags
    pub fn new(series_id: &str, protocol_name: &str, series_description: &str) -> Self {
        Self {
            series_id: series_id.to_string(),
            protocol_name: protocol_name.to_string(),
            series_description: series_description.to_string(),
            image_type: Vec::new(),
        }
    }

    /// Adds image-type flag tokens to the record
    pub fn with_image_type(mut self, flags: &[&str]) -> Self {
        self.image_type = flags.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Checks for an exact flag token in `image_type`
    ///
    /// Flag tokens keep their scanner casing (DICOM ImageType values are
    /// upper-case), so the comparison is exact rather than normalized.
    pub fn has_image_type_flag(&self, flag: &str) -> bool {
        self.image_type.iter().any(|f| f == flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_type_flag_is_exact() {
        let series = SeriesInfo::new("2", "t1w_mpr", "T1w_MPR").with_image_type(&["ND", "NORM"]);
        assert!(series.has_image_type_flag("NORM"));
        assert!(series.has_image_type_flag("ND"));
        assert!(!series.has_image_type_flag("norm"));
        assert!(!series.has_image_type_flag("MOSAIC"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_deserialize_defaults_image_type() {
        let series: SeriesInfo = serde_json::from_str(
            r#"{"series_id": "4", "protocol_name": "fmri_rest1_ap", "series_description": "bold"}"#,
        )
        .unwrap();
        assert_eq!(series.series_id, "4");
        assert!(series.image_type.is_empty());
    }
}
