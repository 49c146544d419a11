pub mod indent;
pub mod position;
pub mod words;

// Re-export main types and functions
pub use indent::{measure_indent_column, set_indent_column};
pub use position::{CharKind, Classifier, Position};
pub use words::{word_at, word_at_with};
