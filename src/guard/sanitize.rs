use std::sync::LazyLock;

use regex::Regex;

use super::patterns::{CODE_REMOVED_TOKEN, INJECTION_PATTERNS, REMOVED_TOKEN};
use super::types::{GuardError, InputModification, InputModificationKind, SanitizedInput};

/// Maximum symptom description length in Unicode code points.
pub const MAX_INPUT_LENGTH: usize = 2_000;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("Invalid code fence pattern"));

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("Invalid script pattern"));

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid newline pattern"));

/// Sanitize a symptom description before it reaches the analysis model.
///
/// Stage order matters: instruction patterns are removed from the raw
/// phrasing, code fences are stripped while their delimiters are still
/// intact, and the character allow-list runs last so it also cleans up
/// whatever the earlier stages left behind.
pub fn sanitize_symptom_input(
    raw: &str,
    max_length: usize,
) -> Result<SanitizedInput, GuardError> {
    let mut text = raw.trim().to_string();
    let mut modifications = Vec::new();

    // Stage 1: Remove instruction-override phrasing
    let (cleaned, matched_labels) = remove_injection_patterns(&text);
    text = cleaned;
    if !matched_labels.is_empty() {
        modifications.push(InputModification {
            kind: InputModificationKind::InjectionPatternRemoved,
            description: format!(
                "Removed instruction-override phrasing: {}",
                matched_labels.join(", ")
            ),
        });
    }

    // Stage 2: Strip code fences and script blocks while their
    // delimiters are still unescaped
    let before = text.clone();
    text = remove_code_blocks(&text);
    if text != before {
        modifications.push(InputModification {
            kind: InputModificationKind::CodeBlockRemoved,
            description: "Stripped code fences or script blocks".to_string(),
        });
    }

    // Stage 3: Escape structural characters, collapse newline floods
    let before = text.clone();
    text = escape_structural_chars(&text);
    if text != before {
        modifications.push(InputModification {
            kind: InputModificationKind::StructuralCharsEscaped,
            description: "Escaped structural characters".to_string(),
        });
    }

    // Stage 4: Character allow-list
    let before = text.clone();
    text = apply_allow_list(&text);
    if text != before {
        modifications.push(InputModification {
            kind: InputModificationKind::DisallowedCharsDropped,
            description: "Dropped characters outside the allow-list".to_string(),
        });
    }

    // Stage 5: Truncate to maximum length
    let length = text.chars().count();
    if length > max_length {
        text = text.chars().take(max_length).collect();
        modifications.push(InputModification {
            kind: InputModificationKind::ExcessiveLengthTruncated,
            description: format!("Truncated from {} to {} characters", length, max_length),
        });
    }

    let was_modified = !modifications.is_empty();

    Ok(SanitizedInput {
        text,
        was_modified,
        modifications,
    })
}

/// Default sanitization with standard max length, returning text only.
pub fn sanitize_symptom_text(raw: &str) -> String {
    sanitize_symptom_input(raw, MAX_INPUT_LENGTH)
        .map(|s| s.text)
        .unwrap_or_default()
}

/// Sanitize a field taken straight from a JSON request body.
/// Non-string values (numbers, null, arrays...) sanitize to an empty
/// string rather than failing the request.
pub fn sanitize_json_field(value: &serde_json::Value) -> String {
    match value.as_str() {
        Some(s) => sanitize_symptom_text(s),
        None => String::new(),
    }
}

/// Replace every instruction-override match with [REMOVED], collecting
/// the labels of the patterns that fired for the audit trail.
fn remove_injection_patterns(text: &str) -> (String, Vec<&'static str>) {
    let mut result = text.to_string();
    let mut labels = Vec::new();
    for p in INJECTION_PATTERNS.iter() {
        if p.regex.is_match(&result) {
            if !labels.contains(&p.label) {
                labels.push(p.label);
            }
            result = p.regex.replace_all(&result, REMOVED_TOKEN).to_string();
        }
    }
    (result, labels)
}

/// Replace fenced code with [CODE REMOVED] and script blocks with [REMOVED].
fn remove_code_blocks(text: &str) -> String {
    let result = CODE_FENCE.replace_all(text, CODE_REMOVED_TOKEN);
    SCRIPT_BLOCK.replace_all(&result, REMOVED_TOKEN).to_string()
}

/// Backslash-escape characters with structural meaning in the prompt
/// template. Backslash itself goes first so the escapes inserted for the
/// other characters are not escaped again.
fn escape_structural_chars(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('`', "\\`")
        .replace('$', "\\$")
        .replace('{', "\\{")
        .replace('}', "\\}");
    EXCESS_NEWLINES.replace_all(&escaped, "\n\n").to_string()
}

/// Keep printable ASCII, Arabic script, whitespace, and the punctuation
/// medical text needs; drop everything else.
fn apply_allow_list(text: &str) -> String {
    text.chars().filter(|c| is_allowed_char(*c)).collect()
}

fn is_allowed_char(c: char) -> bool {
    matches!(c, '\u{0020}'..='\u{007E}')
        || matches!(c, '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}')
        || c.is_whitespace()
        || matches!(c, '-' | '.' | ',' | '\'' | '(' | ')' | '°')
}
