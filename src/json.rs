//! String-in, JSON-out entry points for tool-calling hosts.
//!
//! Neither function fails: problems are reported in-band as `{"error": "<message>"}`.

use serde::Serialize;
use serde_json::json;

use crate::analysis::analyze;
use crate::protein::predict_sequence;

/// Analyze `raw` and render the [`AnalysisResult`](crate::AnalysisResult) as pretty JSON.
///
/// Rejected sequences still produce a result object, with `"valid": false`.
///
/// # Examples
///
/// ```
/// use orfscan::json::analyze_sequence_json;
///
/// let value: serde_json::Value = serde_json::from_str(&analyze_sequence_json("gcat")).unwrap();
/// assert_eq!(value["valid"], true);
/// assert_eq!(value["gc_percent"], 50.0);
///
/// let value: serde_json::Value = serde_json::from_str(&analyze_sequence_json("")).unwrap();
/// assert_eq!(value["error"], "Empty sequence");
/// ```
#[must_use]
pub fn analyze_sequence_json(raw: &str) -> String {
    to_json(&analyze(raw))
}

/// Translate the ORF `dna` spanning `start..=end` and render the
/// [`Protein`](crate::Protein) as pretty JSON.
///
/// # Examples
///
/// ```
/// use orfscan::json::predict_protein_json;
///
/// let value: serde_json::Value =
///     serde_json::from_str(&predict_protein_json("ATGAAATAA", 1, 9)).unwrap();
/// assert_eq!(value["orf_id"], "ORF_1_9");
/// assert_eq!(value["aa_sequence"], "MK");
///
/// let value: serde_json::Value = serde_json::from_str(&predict_protein_json("", 0, 0)).unwrap();
/// assert_eq!(value, serde_json::json!({"error": "No sequence provided"}));
/// ```
#[must_use]
pub fn predict_protein_json(dna: &str, start: usize, end: usize) -> String {
    match predict_sequence(dna, start, end) {
        Ok(protein) => to_json(&protein),
        Err(error) => error_json(&error),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|error| {
        tracing::debug!(%error, "serialization failed");
        error_json(&error)
    })
}

fn error_json(error: &dyn std::fmt::Display) -> String {
    json!({ "error": error.to_string() }).to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn analysis_is_pretty_printed() {
        let text = analyze_sequence_json("ATGC");
        assert!(text.contains('\n'));
        assert_eq!(parse(&text)["cleaned_sequence"], "ATGC");
    }

    #[test]
    fn rejected_sequence_reports_invalid() {
        assert_eq!(
            parse(&analyze_sequence_json("XYZ")),
            json!({
                "valid": false,
                "error": "Too many invalid characters: XYZ...",
                "sequence_id": "unknown"
            })
        );
    }

    #[test]
    fn protein_json_shape() {
        assert_eq!(
            parse(&predict_protein_json("ATGAAATAA", 1, 9)),
            json!({
                "orf_id": "ORF_1_9",
                "aa_sequence": "MK",
                "length": 2,
                "properties": {"molecular_weight": 220.0, "hydrophobicity": -1.0},
                "signal_peptide": false
            })
        );
    }

    #[test]
    fn missing_protein_sequence_is_an_error_object() {
        assert_eq!(
            parse(&predict_protein_json("", 3, 5)),
            json!({"error": "No sequence provided"})
        );
    }
}
