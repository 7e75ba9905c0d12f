//! Styles for the paged list.
//!
//! Every element outside the rows themselves has its own style: the header,
//! the refresh indicator, the empty placeholder, the loading footer, the
//! cursor marker and the status line. Rows are styled by the renderer.
//!
//! ```rust
//! use bubbletea_paged_list::list::style::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.header = Style::new()
//!     .foreground(AdaptiveColor { Light: "#1a1a1a", Dark: "#ffffff" })
//!     .bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Unicode bullet used between help entries.
pub const BULLET: &str = "•";

/// Marker drawn left of the row under the cursor.
pub const CURSOR: &str = "›";

/// Styles of the list chrome.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Header line above the rows.
    pub header: Style,
    /// Refresh indicator line.
    pub refresh: Style,
    /// Empty-state placeholder.
    pub no_items: Style,
    /// Loading footer below the rows.
    pub loader: Style,
    /// Cursor marker.
    pub cursor: Style,
    /// Status line.
    pub status_bar: Style,
    /// Help line.
    pub help: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            header: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            refresh: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#8E8E8E",
                    Dark: "#747373",
                })
                .padding(0, 0, 0, 2),
            no_items: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#909090",
                    Dark: "#626262",
                })
                .padding(0, 0, 0, 2),
            loader: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#8E8E8E",
                    Dark: "#747373",
                })
                .padding(0, 0, 0, 2),
            cursor: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            status_bar: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(0, 0, 0, 2),
            help: Style::new().foreground(subdued_color).padding(0, 0, 0, 2),
        }
    }
}
