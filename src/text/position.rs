/// Character class used by word-boundary motions.
///
/// A word is a maximal run of characters of a single class. The split between
/// word characters and punctuation matches common editor word-motion
/// semantics: `foo.bar` is three words (`foo`, `.`, `bar`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharKind {
    /// Alphanumeric or underscore
    Word,
    /// Non-whitespace, non-word
    Punctuation,
    /// Unicode whitespace
    Whitespace,
}

impl CharKind {
    /// Default classifier shared by all word motions
    pub fn of(ch: char) -> CharKind {
        if ch.is_whitespace() {
            CharKind::Whitespace
        } else if ch.is_alphanumeric() || ch == '_' {
            CharKind::Word
        } else {
            CharKind::Punctuation
        }
    }
}

/// Pluggable character classifier for word motions.
///
/// The same classifier must be used across `word_left`, `word_right` and
/// `current_word_end` for a given lookup; mixing classifiers breaks the
/// word-span invariant.
pub type Classifier = fn(char) -> CharKind;

/// An immutable line/character coordinate into a document's text.
///
/// `character` counts characters from the start of the line, with
/// `0 <= character <= line length`; `character == line length` addresses the
/// end-of-line position past the last character. Navigation operations return
/// new values and clamp at line boundaries instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// One column to the right, clamped to the end of the line
    pub fn right(&self, line_text: &str) -> Position {
        let len = line_text.chars().count();
        Position::new(self.line, (self.character + 1).min(len))
    }

    /// One column to the left, clamped to column 0
    pub fn left(&self) -> Position {
        Position::new(self.line, self.character.saturating_sub(1))
    }

    /// Start of the current word (when `inclusive` and the position sits on a
    /// non-whitespace character) or of the previous word on this line.
    ///
    /// Falls back to column 0 when there is no word to the left.
    pub fn word_left(&self, line_text: &str, inclusive: bool) -> Position {
        self.word_left_with(line_text, inclusive, CharKind::of)
    }

    /// `word_left` with a caller-supplied character classifier
    pub fn word_left_with(
        &self,
        line_text: &str,
        inclusive: bool,
        classify: Classifier,
    ) -> Position {
        let chars: Vec<char> = line_text.chars().collect();
        let mut i = self.character.min(chars.len());

        if inclusive
            && i < chars.len()
            && classify(chars[i]) != CharKind::Whitespace
        {
            // On a word-boundary character: that character counts as inside
            // its word, so walk back to the start of its run.
            let kind = classify(chars[i]);
            while i > 0 && classify(chars[i - 1]) == kind {
                i -= 1;
            }
            return Position::new(self.line, i);
        }

        // Between words (or exclusive): skip whitespace leftwards, then walk
        // back over the previous word's run.
        while i > 0 && classify(chars[i - 1]) == CharKind::Whitespace {
            i -= 1;
        }
        if i == 0 {
            return Position::new(self.line, 0);
        }
        let kind = classify(chars[i - 1]);
        while i > 0 && classify(chars[i - 1]) == kind {
            i -= 1;
        }
        Position::new(self.line, i)
    }

    /// First character of the next word on this line, or the end-of-line
    /// position when no further word exists.
    pub fn word_right(&self, line_text: &str) -> Position {
        self.word_right_with(line_text, CharKind::of)
    }

    /// `word_right` with a caller-supplied character classifier
    pub fn word_right_with(&self, line_text: &str, classify: Classifier) -> Position {
        let chars: Vec<char> = line_text.chars().collect();
        let mut i = self.character.min(chars.len());

        // Leave the current word's run before looking for the next one.
        if i < chars.len() && classify(chars[i]) != CharKind::Whitespace {
            let kind = classify(chars[i]);
            while i < chars.len() && classify(chars[i]) == kind {
                i += 1;
            }
        }
        while i < chars.len() && classify(chars[i]) == CharKind::Whitespace {
            i += 1;
        }
        Position::new(self.line, i)
    }

    /// Last character of the word at (or, non-inclusive, after) this position.
    ///
    /// Clamped to the last column of the line when no word is found to the
    /// right; on an empty line this is column 0.
    pub fn current_word_end(&self, line_text: &str, inclusive: bool) -> Position {
        self.current_word_end_with(line_text, inclusive, CharKind::of)
    }

    /// `current_word_end` with a caller-supplied character classifier
    pub fn current_word_end_with(
        &self,
        line_text: &str,
        inclusive: bool,
        classify: Classifier,
    ) -> Position {
        let chars: Vec<char> = line_text.chars().collect();
        let mut i = self.character.min(chars.len());

        if !inclusive {
            // Exclusive motion starts past the current character.
            i = (i + 1).min(chars.len());
        }
        while i < chars.len() && classify(chars[i]) == CharKind::Whitespace {
            i += 1;
        }
        if i >= chars.len() {
            return Position::new(self.line, chars.len().saturating_sub(1));
        }
        let kind = classify(chars[i]);
        while i + 1 < chars.len() && classify(chars[i + 1]) == kind {
            i += 1;
        }
        Position::new(self.line, i)
    }
}
