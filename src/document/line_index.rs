use crate::error::{CoreError, CoreResult};
use crate::text::Position;

/// Per-line length table for offset/position conversion.
///
/// Offsets and lengths count characters, with a terminator width of 1 for
/// every `\n`-terminated line and 0 for the final line. The table is computed
/// once from a document snapshot and read-only thereafter; callers must
/// rebuild it whenever the snapshot changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Character length of each line, excluding its terminator
    line_lengths: Vec<usize>,
    /// Cumulative character offset of each line start
    line_starts: Vec<usize>,
    /// Total character count, terminators included
    total_length: usize,
}

impl LineIndex {
    /// Build the table from full document text
    pub fn of_text(text: &str) -> Self {
        Self::from_lines(text.split('\n'))
    }

    /// Build the table from an ordered sequence of line texts.
    ///
    /// Every line but the last is taken to carry a one-character terminator.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut line_lengths = Vec::new();
        let mut line_starts = Vec::new();
        let mut offset = 0;

        for line in lines {
            let length = line.chars().count();
            line_starts.push(offset);
            line_lengths.push(length);
            offset += length + 1;
        }
        if line_lengths.is_empty() {
            line_starts.push(0);
            line_lengths.push(0);
            offset = 1;
        }

        Self {
            line_lengths,
            line_starts,
            // The final line has no terminator
            total_length: offset - 1,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_lengths.len()
    }

    /// Character length of a line, excluding its terminator
    pub fn line_length(&self, line: usize) -> CoreResult<usize> {
        self.line_lengths
            .get(line)
            .copied()
            .ok_or(CoreError::LineOutOfRange {
                line,
                line_count: self.line_count(),
            })
    }

    /// Total character count of the document, terminators included
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Convert an absolute character offset to a line/character position.
    ///
    /// Valid offsets are `0..=total_length()`; anything past that is a caller
    /// contract violation reported as [`CoreError::OffsetOutOfRange`].
    pub fn offset_to_position(&self, offset: usize) -> CoreResult<Position> {
        if offset > self.total_length {
            return Err(CoreError::OffsetOutOfRange {
                offset,
                total_length: self.total_length,
            });
        }
        // Last line whose start is at or before the offset
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Ok(Position::new(line, offset - self.line_starts[line]))
    }

    /// Convert a line/character position to an absolute character offset.
    ///
    /// The position must be canonical: `character` may address at most the
    /// end-of-line column (the line's length), where the terminator sits.
    pub fn position_to_offset(&self, position: Position) -> CoreResult<usize> {
        let line_length = self.line_length(position.line)?;
        if position.character > line_length {
            return Err(CoreError::CharOutOfRange {
                character: position.character,
                line_length,
            });
        }
        Ok(self.line_starts[position.line] + position.character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_table_basic() {
        let index = LineIndex::of_text("hello\nworld");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_length(0), Ok(5));
        assert_eq!(index.line_length(1), Ok(5));
        assert_eq!(index.total_length(), 11);
    }

    #[test]
    fn test_trailing_newline_adds_empty_final_line() {
        let index = LineIndex::of_text("hello\n");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_length(1), Ok(0));
        assert_eq!(index.total_length(), 6);
    }

    #[test]
    fn test_empty_document_has_one_empty_line() {
        let index = LineIndex::of_text("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_length(0), Ok(0));
        assert_eq!(index.total_length(), 0);
    }

    #[test]
    fn test_offset_to_position() {
        let index = LineIndex::of_text("ab\ncd");
        assert_eq!(index.offset_to_position(0), Ok(Position::new(0, 0)));
        assert_eq!(index.offset_to_position(1), Ok(Position::new(0, 1)));
        // The terminator column belongs to its line
        assert_eq!(index.offset_to_position(2), Ok(Position::new(0, 2)));
        assert_eq!(index.offset_to_position(3), Ok(Position::new(1, 0)));
        assert_eq!(index.offset_to_position(5), Ok(Position::new(1, 2)));
    }

    #[test]
    fn test_offset_past_end_is_range_error() {
        let index = LineIndex::of_text("ab");
        assert_eq!(
            index.offset_to_position(3),
            Err(CoreError::OffsetOutOfRange {
                offset: 3,
                total_length: 2,
            })
        );
    }

    #[test]
    fn test_position_to_offset() {
        let index = LineIndex::of_text("ab\ncd");
        assert_eq!(index.position_to_offset(Position::new(0, 0)), Ok(0));
        assert_eq!(index.position_to_offset(Position::new(0, 2)), Ok(2));
        assert_eq!(index.position_to_offset(Position::new(1, 1)), Ok(4));
    }

    #[test]
    fn test_position_past_line_end_is_range_error() {
        let index = LineIndex::of_text("ab\ncd");
        assert_eq!(
            index.position_to_offset(Position::new(0, 3)),
            Err(CoreError::CharOutOfRange {
                character: 3,
                line_length: 2,
            })
        );
        assert_eq!(
            index.position_to_offset(Position::new(2, 0)),
            Err(CoreError::LineOutOfRange {
                line: 2,
                line_count: 2,
            })
        );
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        let index = LineIndex::of_text("世界\nab");
        assert_eq!(index.line_length(0), Ok(2));
        assert_eq!(index.offset_to_position(3), Ok(Position::new(1, 0)));
        assert_eq!(index.position_to_offset(Position::new(1, 0)), Ok(3));
    }

    #[test]
    fn test_roundtrip_all_offsets() {
        for text in ["", "a", "ab\ncd", "ab\ncd\n", "\n\n", "世界\nx\n"] {
            let index = LineIndex::of_text(text);
            for offset in 0..=index.total_length() {
                let position = index.offset_to_position(offset).unwrap();
                assert_eq!(
                    index.position_to_offset(position),
                    Ok(offset),
                    "offset {offset} in {text:?}"
                );
            }
        }
    }

    #[test]
    fn test_roundtrip_all_canonical_positions() {
        for text in ["", "ab\ncd", "ab\ncd\n", "\n"] {
            let index = LineIndex::of_text(text);
            for line in 0..index.line_count() {
                for character in 0..=index.line_length(line).unwrap() {
                    let position = Position::new(line, character);
                    let offset = index.position_to_offset(position).unwrap();
                    assert_eq!(
                        index.offset_to_position(offset),
                        Ok(position),
                        "position {position:?} in {text:?}"
                    );
                }
            }
        }
    }
}
