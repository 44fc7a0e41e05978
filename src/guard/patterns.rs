use std::sync::LazyLock;

use regex::Regex;

/// Replacement token for removed instruction-override phrasing.
pub const REMOVED_TOKEN: &str = "[REMOVED]";

/// Replacement token for stripped code fences.
pub const CODE_REMOVED_TOKEN: &str = "[CODE REMOVED]";

/// A compiled injection matcher with its audit label.
pub struct InjectionPattern {
    pub regex: Regex,
    pub label: &'static str,
}

/// Instruction-override patterns, applied in order. Earlier replacements
/// can change whether later patterns match, so the order is part of the
/// contract.
pub static INJECTION_PATTERNS: LazyLock<Vec<InjectionPattern>> = LazyLock::new(|| {
    vec![
        // Override attempts against the surrounding prompt
        pattern(
            r"(?i)(?:ignore|disregard|forget)\s+(?:all\s+|any\s+)?(?:previous|above|prior|earlier)\s+(?:instructions?|prompts?|rules?|directions?)",
            "instruction override",
        ),
        pattern(
            r"(?i)(?:ignore|disregard|forget)\s+(?:everything|all)\s+(?:above|before|previously)",
            "instruction override",
        ),
        pattern(r"(?i)(?:new|override)\s+instructions?\s*:", "instruction injection"),
        // Role-label spoofing
        pattern(r"(?i)\bsystem\s*:", "role spoofing"),
        pattern(r"(?i)\bassistant\s*:", "role spoofing"),
        pattern(r"(?i)\bprompt\s*:", "role spoofing"),
        // Prompt exfiltration
        pattern(
            r"(?i)(?:reveal|show|repeat|print|display)\s+(?:me\s+)?(?:your|the)\s+(?:system\s+)?(?:prompt|instructions?)",
            "prompt exfiltration",
        ),
        pattern(
            r"(?i)what\s+(?:is|are)\s+your\s+(?:system\s+)?(?:prompt|instructions?)",
            "prompt exfiltration",
        ),
        // Counter-directives
        pattern(r"(?i)do\s+not\s+follow", "counter directive"),
        pattern(r"(?i)instead\s+(?:do|follow|say|respond)", "counter directive"),
    ]
});

/// Keywords whose presence in raw input flags adversarial intent.
/// Matched case-insensitively as substrings; multi-word entries tolerate
/// words in between (see `guard::intent`).
pub const SUSPICIOUS_KEYWORDS: [&str; 10] = [
    "jailbreak",
    "bypass",
    "exploit",
    "injection",
    "system prompt",
    "ignore instruction",
    "reveal prompt",
    "override",
    "backdoor",
    "escape",
];

fn pattern(regex_str: &str, label: &'static str) -> InjectionPattern {
    InjectionPattern {
        regex: Regex::new(regex_str).expect("Invalid injection pattern"),
        label,
    }
}
