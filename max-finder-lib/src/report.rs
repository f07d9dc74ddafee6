//! Presentation of a pipeline outcome: the prompt, the result line and the
//! machine-readable report.

use crate::error::MaxFinderError;
use crate::pipeline::{Analysis, Outcome};
use serde::Serialize;
use std::fmt;

/// Printed before the input line is read.
pub const PROMPT: &str = "Enter numbers separated by spaces:";

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found(value) => write!(f, "The maximum number is: {value}"),
            Outcome::Empty => f.write_str("No valid numbers provided."),
        }
    }
}

/// Serializable summary of a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<'a> {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<Vec<&'a str>>,
}

impl<'a> Report<'a> {
    /// Builds a report carrying only the outcome.
    pub fn new(outcome: Outcome) -> Self {
        let (label, value) = match outcome {
            Outcome::Found(value) => ("found", Some(value)),
            Outcome::Empty => ("empty", None),
        };

        Report {
            outcome: label,
            value,
            rejected: None,
        }
    }

    /// Builds a report that also lists the rejected tokens.
    pub fn with_rejected(analysis: &Analysis<'a>) -> Self {
        Report {
            rejected: Some(analysis.rejected().to_vec()),
            ..Report::new(analysis.outcome())
        }
    }

    /// Renders the report as a single-line JSON object.
    pub fn to_json(&self) -> Result<String, MaxFinderError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Formats the rejected-token summary shown on stderr.
pub fn rejected_summary(rejected: &[&str]) -> String {
    if rejected.is_empty() {
        return "Rejected tokens: none".to_string();
    }

    let quoted: Vec<String> = rejected.iter().map(|token| format!("'{token}'")).collect();
    format!("Rejected tokens: {}", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{analyze, compute_max};
    use rstest::rstest;

    #[rstest]
    #[case("3 7 2", "The maximum number is: 7")]
    #[case("", "No valid numbers provided.")]
    #[case("a b c", "No valid numbers provided.")]
    #[case("5 x 9 -3", "The maximum number is: 9")]
    #[case("-10 -2 -50", "The maximum number is: -2")]
    #[case("4 4 4", "The maximum number is: 4")]
    fn renders_result_line(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(compute_max(input).to_string(), expected);
    }

    #[test]
    fn json_report_for_found_value() {
        let report = Report::new(Outcome::Found(7));
        assert_eq!(report.to_json().unwrap(), r#"{"outcome":"found","value":7}"#);
    }

    #[test]
    fn json_report_for_empty_outcome_has_no_value() {
        let report = Report::new(Outcome::Empty);
        assert_eq!(report.to_json().unwrap(), r#"{"outcome":"empty"}"#);
    }

    #[test]
    fn json_report_lists_rejected_tokens() {
        let analysis = analyze("5 x 9 -3");
        let report = Report::with_rejected(&analysis);
        assert_eq!(
            report.to_json().unwrap(),
            r#"{"outcome":"found","value":9,"rejected":["x"]}"#
        );
    }

    #[test]
    fn serialization_failure_converts_into_report_error() {
        let source = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = MaxFinderError::from(source);

        assert!(matches!(err, MaxFinderError::ReportSerialize(_)));
        assert!(err.to_string().starts_with("Failed to serialize report:"));
    }

    #[test]
    fn summary_quotes_each_rejected_token() {
        assert_eq!(rejected_summary(&["x", "1.5"]), "Rejected tokens: 'x', '1.5'");
        assert_eq!(rejected_summary(&[]), "Rejected tokens: none");
    }
}
