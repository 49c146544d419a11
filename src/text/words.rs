use std::sync::LazyLock;

use regex::Regex;

use crate::text::position::{CharKind, Classifier, Position};

/// Matches a span that carries no word: empty or all-whitespace
static BLANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*$").expect("valid blank-span regex"));

/// Find the word under or after `position` on its line.
///
/// When the cursor sits on a non-whitespace character the enclosing word is
/// returned; when it sits on whitespace or at end of line the next word on
/// the line is returned. `None` means no word could be found, the expected
/// outcome on a blank line or past the last word; it is never an error.
pub fn word_at(position: Position, line_text: &str) -> Option<String> {
    word_at_with(position, line_text, CharKind::of)
}

/// `word_at` with a caller-supplied character classifier.
///
/// The classifier is threaded through every motion involved in the lookup so
/// the word span stays consistent with a substituted word-boundary scheme.
pub fn word_at_with(
    position: Position,
    line_text: &str,
    classify: Classifier,
) -> Option<String> {
    let chars: Vec<char> = line_text.chars().collect();

    let between_words = match chars.get(position.character) {
        Some(&ch) => classify(ch) == CharKind::Whitespace,
        None => true,
    };
    let start = if between_words {
        position.word_right_with(line_text, classify)
    } else {
        position.word_left_with(line_text, true, classify)
    };
    let end = start
        .current_word_end_with(line_text, true, classify)
        .right(line_text);

    if start.character >= end.character {
        return None;
    }
    let span: String = chars[start.character..end.character].iter().collect();
    if BLANK.is_match(&span) {
        return None;
    }
    Some(span)
}
