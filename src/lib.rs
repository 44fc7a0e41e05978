//! Prompt-injection defense layer for Shifa's AI symptom analysis.
//!
//! Raw patient text flows through [`guard::sanitize`] before it is
//! embedded into the analysis prompt ([`prompt`]); [`guard::intent`]
//! independently flags adversarial wording in the raw input for audit
//! logging. [`analysis`] is the typed contract for the model's reply.

pub mod analysis;
pub mod guard;
pub mod prompt;

pub use guard::PromptGuard;
