use regex::Regex;
use std::sync::OnceLock;

/// Matches a task token with its trailing run digit, e.g. "rest1" or "task2"
fn task_run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?P<task>.*)(?P<run>\d)$").expect("valid regex"))
}

/// Splits a protocol name into exactly `expected` underscore-delimited parts
///
/// Returns `None` when the part count differs; the caller decides how to
/// report the malformed name.
pub fn split_parts(protocol_name: &str, expected: usize) -> Option<Vec<&str>> {
    let parts: Vec<&str> = protocol_name.split('_').collect();
    if parts.len() == expected {
        Some(parts)
    } else {
        None
    }
}

/// Parses a task token into its task name and run number
///
/// The trailing character is the run index ("rest1" -> ("rest", 1),
/// "rest2" -> ("rest", 2)); a token without a trailing digit is malformed.
/// Run numbers are 1-indexed and unpadded here; zero-padding is the
/// template's concern.
pub fn parse_task_run(token: &str) -> Option<(String, u32)> {
    let captures = task_run_pattern().captures(token)?;
    let task = captures["task"].to_string();
    let run = captures["run"].parse().ok()?;
    Some((task, run))
}

/// Normalizes a phase-encoding direction token for output ("ap" -> "AP")
pub fn normalize_dir(token: &str) -> String {
    token.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fmri_rest1_ap", 3, Some(vec!["fmri", "rest1", "ap"]))]
    #[case("spinechofieldmap_ap", 2, Some(vec!["spinechofieldmap", "ap"]))]
    #[case("fmri_rest1", 3, None)]
    #[case("fmri_rest1_ap_extra", 3, None)]
    #[case("spinechofieldmap", 2, None)]
    fn test_split_parts(
        #[case] protocol_name: &str,
        #[case] expected: usize,
        #[case] parts: Option<Vec<&str>>,
    ) {
        assert_eq!(split_parts(protocol_name, expected), parts);
    }

    #[rstest]
    #[case("rest1", Some(("rest", 1)))]
    #[case("rest2", Some(("rest", 2)))]
    #[case("task9", Some(("task", 9)))]
    // Only the trailing character is the run index
    #[case("task12", Some(("task1", 2)))]
    #[case("rest", None)]
    #[case("", None)]
    fn test_parse_task_run(#[case] token: &str, #[case] expected: Option<(&str, u32)>) {
        let expected = expected.map(|(task, run)| (task.to_string(), run));
        assert_eq!(parse_task_run(token), expected);
    }

    #[test]
    fn test_normalize_dir() {
        assert_eq!(normalize_dir("ap"), "AP");
        assert_eq!(normalize_dir("Pa"), "PA");
        assert_eq!(normalize_dir("RL"), "RL");
    }
}
