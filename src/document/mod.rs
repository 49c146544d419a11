pub mod line_index;
pub mod snapshot;

// Re-export main types
pub use line_index::LineIndex;
pub use snapshot::{DocumentSnapshot, StringDocument};
