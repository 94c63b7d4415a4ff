use regex::Regex;
use std::sync::LazyLock;

static LINE_ENDINGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n?").unwrap());
static BLANK_LINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
// Any whitespace except a line feed.
static HORIZONTAL_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]{2,}").unwrap());

/// Normalize whitespace in extracted text.
///
/// Steps run in a fixed order: line endings become `\n`, runs of three or
/// more newlines shrink to a single blank line, runs of horizontal whitespace
/// shrink to one space, and the result is trimmed. Cleaning is idempotent.
pub fn clean_text(text: &str) -> String {
    let text = LINE_ENDINGS.replace_all(text, "\n");
    let text = BLANK_LINE_RUNS.replace_all(&text, "\n\n");
    let text = HORIZONTAL_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}
