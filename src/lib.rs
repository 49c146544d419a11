pub mod config;
pub mod document;
pub mod error;
pub mod text;

// Re-export the crate surface
pub use config::TabConfig;
pub use document::{DocumentSnapshot, LineIndex, StringDocument};
pub use error::{CoreError, CoreResult};
pub use text::{
    CharKind, Classifier, Position, measure_indent_column, set_indent_column, word_at,
    word_at_with,
};
