use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Host tab settings, read once per call from the document snapshot.
///
/// Mirrors the editor options `tabstop` (visible width of one tab character)
/// and `expandtab` (whether rewritten indentation uses spaces only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    tab_width: usize,
    expand_tabs: bool,
}

impl TabConfig {
    /// Create a tab configuration, rejecting a zero tab width
    pub fn new(tab_width: usize, expand_tabs: bool) -> CoreResult<Self> {
        if tab_width == 0 {
            return Err(CoreError::InvalidTabWidth(tab_width));
        }
        Ok(Self {
            tab_width,
            expand_tabs,
        })
    }

    /// Visible width of one tab character
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Whether rewritten indentation uses spaces only
    pub fn expand_tabs(&self) -> bool {
        self.expand_tabs
    }
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            tab_width: 8,
            expand_tabs: false,
        }
    }
}
