use std::sync::LazyLock;

use regex::Regex;

/// Delimiter marking the boundary of user-controlled prompt content.
pub const USER_CONTENT_DELIMITER: &str = "####";

static DELIMITER_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#{4,}").expect("Invalid delimiter run pattern"));

/// Wrap sanitized user content in #### fences so the prompt template's
/// instructions stay visually and structurally separate from user data.
///
/// `#` survives the sanitizer's allow-list, so runs of four or more are
/// collapsed to three before wrapping. Splitting the result on the
/// delimiter therefore always yields exactly three segments.
pub fn wrap_user_content(text: &str) -> String {
    let neutral = DELIMITER_RUNS.replace_all(text, "###");
    format!("{USER_CONTENT_DELIMITER}\n{neutral}\n{USER_CONTENT_DELIMITER}")
}
