use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Overall severity reported by the analysis model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    Critical,
}

/// What the patient is advised to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    SelfCare,
    SeeDoctor,
    UrgentCare,
    Emergency,
}

/// The structured analysis embedded in the model's free-form reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomAnalysis {
    pub severity: Severity,
    pub urgency_score: u8,
    pub recommended_action: RecommendedAction,
    #[serde(default)]
    pub possible_conditions: Vec<String>,
    #[serde(default)]
    pub advice: String,
}

/// Oracle response parsing errors.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Response contains no JSON object")]
    MissingJson,

    #[error("Embedded JSON failed to parse: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Urgency score {0} outside 1-10")]
    UrgencyOutOfRange(u8),
}

/// Extract the analysis object embedded in the model's reply.
///
/// The model is instructed to answer with bare JSON but routinely pads
/// it with prose, so this scans for the first balanced object instead of
/// parsing the whole reply.
pub fn extract_analysis(response_text: &str) -> Result<SymptomAnalysis, AnalysisError> {
    let json = first_json_object(response_text).ok_or(AnalysisError::MissingJson)?;
    let analysis: SymptomAnalysis = serde_json::from_str(json)?;

    if !(1..=10).contains(&analysis.urgency_score) {
        return Err(AnalysisError::UrgencyOutOfRange(analysis.urgency_score));
    }

    Ok(analysis)
}

/// Locate the first top-level {...} span, tracking brace depth and
/// skipping braces inside JSON strings.
fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
