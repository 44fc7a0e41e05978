use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of input sanitization (pre-LLM).
#[derive(Debug, Clone)]
pub struct SanitizedInput {
    /// The cleaned text, safe to interpolate into the analysis prompt.
    pub text: String,
    /// Whether any modifications were made.
    pub was_modified: bool,
    /// What was stripped (for audit, no patient data).
    pub modifications: Vec<InputModification>,
}

/// A modification made during input sanitization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputModification {
    pub kind: InputModificationKind,
    pub description: String,
}

/// Types of input sanitization applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputModificationKind {
    InjectionPatternRemoved,
    CodeBlockRemoved,
    StructuralCharsEscaped,
    DisallowedCharsDropped,
    ExcessiveLengthTruncated,
}

/// Outcome of the full guard pass over one request field.
/// This is what the request handler consumes and audits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardedInput {
    /// Sanitized text, ready for prompt assembly.
    pub text: String,
    /// Intent heuristic on the raw input. Monitoring signal only; the
    /// request proceeds regardless.
    pub flagged_adversarial: bool,
    /// Whether sanitization changed the input.
    pub was_modified: bool,
    /// Audit trail of applied modifications.
    pub modifications: Vec<InputModification>,
}

/// Prompt guard errors.
#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Pattern table failed to compile: {0}")]
    PatternCompilation(String),

    #[error("Input sanitization failed: {0}")]
    SanitizationFailed(String),
}
