pub mod delimit;
pub mod intent;
pub mod patterns;
pub mod sanitize;
pub mod types;

pub use delimit::{wrap_user_content, USER_CONTENT_DELIMITER};
pub use intent::has_adversarial_intent;
pub use sanitize::{
    sanitize_json_field, sanitize_symptom_input, sanitize_symptom_text, MAX_INPUT_LENGTH,
};
pub use types::{
    GuardError, GuardedInput, InputModification, InputModificationKind, SanitizedInput,
};

/// The production prompt guard for the symptom-analysis endpoint.
///
/// Runs the sanitizer and the intent heuristic over one request field and
/// owns the audit logging. The underlying operations stay pure free
/// functions; this is the seam the request handler talks to.
pub struct PromptGuard {
    /// Maximum input length in code points.
    max_input_length: usize,
}

impl PromptGuard {
    pub fn new() -> Self {
        Self {
            max_input_length: sanitize::MAX_INPUT_LENGTH,
        }
    }

    /// Create a guard with a non-default length cap.
    pub fn with_max_length(max_input_length: usize) -> Self {
        Self { max_input_length }
    }

    /// Run the full guard pass over one raw request field.
    pub fn inspect(&self, raw: &str) -> Result<GuardedInput, GuardError> {
        let sanitized = sanitize::sanitize_symptom_input(raw, self.max_input_length)?;
        let flagged = intent::has_adversarial_intent(raw);

        log_guard_outcome(&sanitized, flagged);

        Ok(GuardedInput {
            text: sanitized.text,
            flagged_adversarial: flagged,
            was_modified: sanitized.was_modified,
            modifications: sanitized.modifications,
        })
    }

    /// Guard a field taken straight from a JSON request body. Non-string
    /// values degrade to an empty, unflagged input instead of an error so
    /// a malformed request cannot crash the handler.
    pub fn inspect_json_field(
        &self,
        value: &serde_json::Value,
    ) -> Result<GuardedInput, GuardError> {
        match value.as_str() {
            Some(s) => self.inspect(s),
            None => Ok(GuardedInput {
                text: String::new(),
                flagged_adversarial: false,
                was_modified: false,
                modifications: vec![],
            }),
        }
    }
}

impl Default for PromptGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Log the guard outcome WITHOUT patient data.
fn log_guard_outcome(sanitized: &SanitizedInput, flagged: bool) {
    if flagged {
        tracing::warn!(
            flagged = true,
            modified = sanitized.was_modified,
            modification_count = sanitized.modifications.len(),
            "Prompt guard: adversarial wording in symptom input"
        );
    } else if sanitized.was_modified {
        tracing::info!(
            flagged = false,
            modification_count = sanitized.modifications.len(),
            kinds = ?sanitized
                .modifications
                .iter()
                .map(|m| format!("{:?}", m.kind))
                .collect::<Vec<_>>(),
            "Prompt guard: input modified"
        );
    } else {
        tracing::debug!(flagged = false, "Prompt guard: clean pass");
    }
}
