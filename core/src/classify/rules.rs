use super::parse;
use crate::error::{BidscatError, Result};
use crate::types::{Descriptor, SeriesCategory, SeriesInfo};

// Protocol-name markers, matched on the lowercased name
const T1_MARKER: &str = "t1w_mpr";
const T2_MARKER: &str = "t2w_spc";
const FUNCTIONAL_MARKER: &str = "fmri";
const DIFFUSION_MARKER: &str = "dmri";
const FIELD_MAP_MARKER: &str = "spinechofieldmap";
const SECOND_FIELD_MAP_MARKER: &str = "spinechofieldmap2";

/// ImageType token marking a vendor-normalized derivative copy
const NORMALIZED_FLAG: &str = "NORM";

/// Series-description marker for single-band reference scans
const REFERENCE_MARKER: &str = "sbref";

/// Outcome of evaluating a rule against one series
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Marker absent; the next rule gets a look
    NoMatch,
    /// Marker present but the series is intentionally excluded
    Skip,
    /// Series claimed by a category
    Classified(SeriesCategory, Descriptor),
}

/// A single classification rule
///
/// Arguments are the series plus its pre-lowercased protocol name and
/// series description, so normalization happens once per series.
pub type Rule = fn(&SeriesInfo, &str, &str) -> Result<RuleOutcome>;

/// Priority-ordered rule table
///
/// Rules are evaluated top to bottom and the first non-[`RuleOutcome::NoMatch`]
/// outcome wins, so a series can never land in two categories.
pub const RULES: &[Rule] = &[t1w, t2w, functional, diffusion, field_map];

/// Evaluates the rule table against one series
pub fn evaluate(series: &SeriesInfo, protocol_name: &str, description: &str) -> Result<RuleOutcome> {
    for rule in RULES {
        match rule(series, protocol_name, description)? {
            RuleOutcome::NoMatch => continue,
            outcome => return Ok(outcome),
        }
    }
    Ok(RuleOutcome::NoMatch)
}

/// T1-weighted anatomical (MPRAGE family)
///
/// The scanner writes a second, intensity-normalized copy of each
/// anatomical flagged with NORM in ImageType; only the raw acquisition is
/// kept.
fn t1w(series: &SeriesInfo, protocol_name: &str, _description: &str) -> Result<RuleOutcome> {
    if !protocol_name.contains(T1_MARKER) {
        return Ok(RuleOutcome::NoMatch);
    }
    if series.has_image_type_flag(NORMALIZED_FLAG) {
        return Ok(RuleOutcome::Skip);
    }
    Ok(RuleOutcome::Classified(
        SeriesCategory::T1w,
        Descriptor::Bare(series.series_id.clone()),
    ))
}

/// T2-weighted anatomical (SPC family); same NORM exclusion as T1
fn t2w(series: &SeriesInfo, protocol_name: &str, _description: &str) -> Result<RuleOutcome> {
    if !protocol_name.contains(T2_MARKER) {
        return Ok(RuleOutcome::NoMatch);
    }
    if series.has_image_type_flag(NORMALIZED_FLAG) {
        return Ok(RuleOutcome::Skip);
    }
    Ok(RuleOutcome::Classified(
        SeriesCategory::T2w,
        Descriptor::Bare(series.series_id.clone()),
    ))
}

/// Functional BOLD run, e.g. "fmri_rest1_ap"
///
/// The middle token carries the task name with its run index as the
/// trailing digit; an "sbref" series description marks the paired
/// single-band reference.
fn functional(series: &SeriesInfo, protocol_name: &str, description: &str) -> Result<RuleOutcome> {
    if !protocol_name.contains(FUNCTIONAL_MARKER) {
        return Ok(RuleOutcome::NoMatch);
    }
    let parts = parse::split_parts(protocol_name, 3)
        .ok_or_else(|| malformed(series, "expected prefix_task<run>_dir"))?;
    let (task, run) = parse::parse_task_run(parts[1])
        .ok_or_else(|| malformed(series, "task token must end in a run digit"))?;
    let category = if description.contains(REFERENCE_MARKER) {
        SeriesCategory::BoldReference
    } else {
        SeriesCategory::Bold
    };
    Ok(RuleOutcome::Classified(
        category,
        Descriptor::Functional {
            item: series.series_id.clone(),
            task,
            dir: parse::normalize_dir(parts[2]),
            run,
        },
    ))
}

/// Diffusion run, e.g. "dmri_b1000_ap"; "sbref" routes to the reference list
fn diffusion(series: &SeriesInfo, protocol_name: &str, description: &str) -> Result<RuleOutcome> {
    if !protocol_name.contains(DIFFUSION_MARKER) {
        return Ok(RuleOutcome::NoMatch);
    }
    let parts = parse::split_parts(protocol_name, 3)
        .ok_or_else(|| malformed(series, "expected prefix_acq_dir"))?;
    let category = if description.contains(REFERENCE_MARKER) {
        SeriesCategory::DwiReference
    } else {
        SeriesCategory::Dwi
    };
    Ok(RuleOutcome::Classified(
        category,
        Descriptor::Diffusion {
            item: series.series_id.clone(),
            acq: parts[1].to_string(),
            dir: parse::normalize_dir(parts[2]),
        },
    ))
}

/// Spin-echo field map, e.g. "spinechofieldmap_ap"
///
/// The second field-map variant ("spinechofieldmap2") duplicates the first
/// and is dropped outright.
fn field_map(series: &SeriesInfo, protocol_name: &str, _description: &str) -> Result<RuleOutcome> {
    if !protocol_name.contains(FIELD_MAP_MARKER) {
        return Ok(RuleOutcome::NoMatch);
    }
    if protocol_name.contains(SECOND_FIELD_MAP_MARKER) {
        return Ok(RuleOutcome::Skip);
    }
    let parts = parse::split_parts(protocol_name, 2)
        .ok_or_else(|| malformed(series, "expected prefix_dir"))?;
    Ok(RuleOutcome::Classified(
        SeriesCategory::FieldMap,
        Descriptor::FieldMap {
            item: series.series_id.clone(),
            dir: parse::normalize_dir(parts[1]),
        },
    ))
}

fn malformed(series: &SeriesInfo, detail: &str) -> BidscatError {
    BidscatError::MalformedProtocolName {
        series_id: series.series_id.clone(),
        protocol_name: series.protocol_name.clone(),
        detail: detail.to_string(),
    }
}
