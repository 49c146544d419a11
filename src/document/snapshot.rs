use crate::config::TabConfig;
use crate::document::line_index::LineIndex;
use crate::error::{CoreError, CoreResult};
use crate::text::{Position, indent, words};

/// Read-only view of a document at a point in time.
///
/// The host editor owns the live document and may mutate it between calls;
/// every operation here reads one internally consistent snapshot and caches
/// nothing across calls. Staleness is the caller's responsibility: re-fetch
/// a snapshot before each call rather than holding one across host edits.
pub trait DocumentSnapshot {
    /// Number of lines in the snapshot, always at least 1
    fn line_count(&self) -> usize;

    /// Text of a line without its terminator.
    ///
    /// Fails with [`CoreError::LineOutOfRange`] when `line >= line_count()`.
    fn line_text(&self, line: usize) -> CoreResult<&str>;

    /// Total character count, line terminators included
    fn total_length(&self) -> usize;

    /// Line-length table consistent with this snapshot's text
    fn line_index(&self) -> &LineIndex;

    /// Host tab settings in effect for this snapshot
    fn tab_config(&self) -> TabConfig;

    /// Whether the position addresses the first line of the document
    fn is_first_line(&self, position: Position) -> bool {
        position.line == 0
    }

    /// Whether the position addresses the last line of the document
    fn is_last_line(&self, position: Position) -> bool {
        position.line + 1 == self.line_count()
    }

    /// Convert an absolute character offset to a position
    fn offset_to_position(&self, offset: usize) -> CoreResult<Position> {
        self.line_index().offset_to_position(offset)
    }

    /// Convert a position to an absolute character offset
    fn position_to_offset(&self, position: Position) -> CoreResult<usize> {
        self.line_index().position_to_offset(position)
    }

    /// Find the word under or after a position.
    ///
    /// `Ok(None)` means the line holds no word at or after the position; an
    /// error is raised only for an out-of-range line.
    fn word_at(&self, position: Position) -> CoreResult<Option<String>> {
        let line_text = self.line_text(position.line)?;
        Ok(words::word_at(position, line_text))
    }

    /// Measure the visible indentation column of a line
    fn measure_indent(&self, line: usize) -> CoreResult<i64> {
        let config = self.tab_config();
        let line_text = self.line_text(line)?;
        Ok(indent::measure_indent_column(line_text, config.tab_width()))
    }

    /// Rewrite a line's indentation to a target visible column, returning the
    /// new line text for the host to apply
    fn set_indent(&self, line: usize, target_column: i64) -> CoreResult<String> {
        let config = self.tab_config();
        let line_text = self.line_text(line)?;
        Ok(indent::set_indent_column(line_text, target_column, &config))
    }
}

/// Owned-string document snapshot.
///
/// Suitable for hosts that hand over full text per call, and for tests. Line
/// byte spans and the line-length table are computed once at construction.
#[derive(Debug, Clone)]
pub struct StringDocument {
    text: String,
    /// Byte range of each line within `text`, terminator excluded
    line_spans: Vec<(usize, usize)>,
    line_index: LineIndex,
    tab_config: TabConfig,
}

impl StringDocument {
    pub fn new(text: String, tab_config: TabConfig) -> Self {
        let line_index = LineIndex::of_text(&text);
        let mut line_spans = Vec::with_capacity(line_index.line_count());
        let mut start = 0;

        for (offset, ch) in text.char_indices() {
            if ch == '\n' {
                line_spans.push((start, offset));
                start = offset + 1;
            }
        }
        line_spans.push((start, text.len()));

        Self {
            text,
            line_spans,
            line_index,
            tab_config,
        }
    }

    /// Full snapshot text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl DocumentSnapshot for StringDocument {
    fn line_count(&self) -> usize {
        self.line_spans.len()
    }

    fn line_text(&self, line: usize) -> CoreResult<&str> {
        self.line_spans
            .get(line)
            .map(|&(start, end)| &self.text[start..end])
            .ok_or(CoreError::LineOutOfRange {
                line,
                line_count: self.line_count(),
            })
    }

    fn total_length(&self) -> usize {
        self.line_index.total_length()
    }

    fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    fn tab_config(&self) -> TabConfig {
        self.tab_config
    }
}
