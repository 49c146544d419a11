use std::sync::LazyLock;

use regex::Regex;

use crate::config::TabConfig;

/// Matches the leading-whitespace run of a line (always matches, possibly empty)
static LEADING_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*").expect("valid leading-whitespace regex"));

/// Measure the visible column where a line's content starts.
///
/// Each tab in the leading-whitespace run advances the column by a flat
/// `tab_width` (not to the next tab stop), each space by 1, and any other
/// whitespace character by 0. Returns `-1` only when the leading-whitespace
/// scan fails to match, which callers must treat as "no indentation".
pub fn measure_indent_column(line_text: &str, tab_width: usize) -> i64 {
    let Some(m) = LEADING_WS.find(line_text) else {
        // ^\s* matches the empty string, so this cannot happen with a healthy
        // regex engine; keep the sentinel observable for callers regardless.
        log::warn!(
            target: "monosashi::indent",
            "leading-whitespace scan failed on {line_text:?}; reporting indeterminate indentation"
        );
        return -1;
    };
    m.as_str()
        .chars()
        .map(|ch| match ch {
            '\t' => tab_width as i64,
            ' ' => 1,
            _ => 0,
        })
        .sum()
}

/// Rewrite a line's indentation to a target visible column.
///
/// The old leading-whitespace run is stripped and replaced by a run whose
/// visible width equals `max(target_column, 0)`: all spaces under
/// `expand_tabs`, otherwise as many tabs as fit followed by spaces for the
/// remainder. Pure over its inputs and idempotent for fixed arguments.
pub fn set_indent_column(line_text: &str, target_column: i64, config: &TabConfig) -> String {
    let width = target_column.max(0) as usize;
    let content = match LEADING_WS.find(line_text) {
        Some(m) => &line_text[m.end()..],
        None => line_text,
    };

    let mut line = String::with_capacity(width + content.len());
    if config.expand_tabs() {
        line.extend(std::iter::repeat_n(' ', width));
    } else {
        let tab_width = config.tab_width().max(1);
        line.extend(std::iter::repeat_n('\t', width / tab_width));
        line.extend(std::iter::repeat_n(' ', width % tab_width));
    }
    line.push_str(content);
    line
}
