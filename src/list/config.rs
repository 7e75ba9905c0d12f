//! Configuration for the paged list.
//!
//! `Config` can be built in code with the `with_*` methods or deserialized
//! from any serde format; missing fields take their defaults.
//!
//! ```rust
//! use bubbletea_paged_list::list::Config;
//!
//! let config = Config::default().with_page_size(50).with_single_select(true);
//! assert_eq!(config.page_size, 50);
//! assert_eq!(config.initial_page_index, 0);
//! ```

use serde::Deserialize;

/// Recognized list options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name attached to every log record of this list.
    pub tag: String,
    /// Page requested by every refresh.
    pub initial_page_index: usize,
    /// Items requested per page.
    pub page_size: usize,
    /// Refresh as soon as the list is initialized.
    pub auto_refresh: bool,
    /// Ignore the refresh gesture. Programmatic refresh still works.
    pub refresh_disabled: bool,
    /// Exclusive selection driven by item presses.
    pub single_select: bool,
    /// Show the placeholder when there is nothing to display.
    pub show_empty: bool,
    /// Placeholder text.
    pub empty_text: String,
    /// Fraction of the window height from the end at which more is loaded.
    pub end_reached_threshold: f64,
    /// Visible rows in the terminal window.
    pub height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag: "advanced".to_string(),
            initial_page_index: 0,
            page_size: 20,
            auto_refresh: true,
            refresh_disabled: false,
            single_select: false,
            show_empty: true,
            empty_text: "No data available".to_string(),
            end_reached_threshold: 0.5,
            height: 10,
        }
    }
}

impl Config {
    /// Sets the log tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the page requested by refresh.
    pub fn with_initial_page_index(mut self, index: usize) -> Self {
        self.initial_page_index = index;
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Enables or disables refresh on init.
    pub fn with_auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh = enabled;
        self
    }

    /// Enables or disables the refresh gesture.
    pub fn with_refresh_disabled(mut self, disabled: bool) -> Self {
        self.refresh_disabled = disabled;
        self
    }

    /// Enables or disables single-select mode.
    pub fn with_single_select(mut self, enabled: bool) -> Self {
        self.single_select = enabled;
        self
    }

    /// Shows or hides the empty placeholder.
    pub fn with_show_empty(mut self, show: bool) -> Self {
        self.show_empty = show;
        self
    }

    /// Sets the placeholder text.
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Sets the end-reached threshold.
    pub fn with_end_reached_threshold(mut self, threshold: f64) -> Self {
        self.end_reached_threshold = threshold;
        self
    }

    /// Sets the window height.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.tag, "advanced");
        assert_eq!(c.page_size, 20);
        assert!(c.auto_refresh);
        assert!(!c.refresh_disabled);
        assert!(!c.single_select);
        assert!(c.show_empty);
        assert_eq!(c.empty_text, "No data available");
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let c: Config =
            serde_json::from_str(r#"{"page_size": 5, "single_select": true}"#).unwrap();
        assert_eq!(c.page_size, 5);
        assert!(c.single_select);
        assert_eq!(c.initial_page_index, 0);
        assert_eq!(c.empty_text, "No data available");
    }
}
