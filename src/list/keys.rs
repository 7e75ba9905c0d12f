//! Key bindings for the paged list.
//!
//! - **Cursor Movement**: `↑/k` (up), `↓/j` (down)
//! - **Press**: `enter` (press the row under the cursor)
//! - **Mark**: `space` (flip the mark of the row under the cursor)
//! - **Refresh**: `r` (pull-to-refresh; disabled with `refresh_disabled`)
//! - **Jump**: `g/home` (scroll back to the first row)
//!
//! ```rust
//! use bubbletea_paged_list::list::ListKeyMap;
//!
//! let keymap = ListKeyMap::default();
//! assert_eq!(keymap.short_help().len(), 6);
//! ```

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings of the list.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move the cursor up one row.
    pub cursor_up: key::Binding,
    /// Move the cursor down one row.
    pub cursor_down: key::Binding,
    /// Press the row under the cursor.
    pub press: key::Binding,
    /// Flip the mark of the row under the cursor.
    pub toggle_mark: key::Binding,
    /// Refresh from the initial page.
    pub refresh: key::Binding,
    /// Scroll back to the first row.
    pub scroll_to_top: key::Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            press: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
            toggle_mark: key::Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "mark"),
            refresh: key::Binding::new(vec![KeyCode::Char('r')]).with_help("r", "refresh"),
            scroll_to_top: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "top"),
        }
    }
}

impl ListKeyMap {
    /// Enabled bindings, in the order they appear in the help line.
    pub fn short_help(&self) -> Vec<&key::Binding> {
        [
            &self.cursor_up,
            &self.cursor_down,
            &self.press,
            &self.toggle_mark,
            &self.refresh,
            &self.scroll_to_top,
        ]
        .into_iter()
        .filter(|b| b.enabled())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_refresh_leaves_help() {
        let mut keymap = ListKeyMap::default();
        keymap.refresh.set_enabled(false);
        let help: Vec<_> = keymap.short_help().iter().map(|b| b.help().desc.clone()).collect();
        assert!(!help.contains(&"refresh".to_string()));
        assert!(help.contains(&"top".to_string()));
    }
}
