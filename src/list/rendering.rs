//! View rendering for the paged list.
//!
//! The view is composed from the [`ViewModel`](super::ViewModel):
//! - Header, when one is set
//! - Refresh indicator while refreshing
//! - Empty placeholder (custom view or `empty_text`), or the rows inside the view window
//! - Loading footer while a load-more is in flight
//! - Status line and help

use super::style::{BULLET, CURSOR};
use super::types::Item;
use super::Model;

impl<I: Item + Send + Sync + 'static> Model<I> {
    pub(super) fn view_header(&self) -> Option<String> {
        self.header
            .as_ref()
            .map(|header| self.styles.header.clone().render(header))
    }

    /// Renders the rows inside the view window.
    ///
    /// The renderer receives the item's index in the full list, not its
    /// position in the window.
    pub(super) fn view_items(&self) -> String {
        let vm = self.view_model();
        if vm.show_empty {
            return match &self.empty_view {
                Some(empty_view) => empty_view(),
                None => self.styles.no_items.clone().render(vm.empty_text),
            };
        }

        let cursor = self.view.cursor();
        let marker = self.styles.cursor.clone().render(CURSOR);
        let window = self.view.window();

        vm.rows
            .get(window.start.min(vm.rows.len())..window.end.min(vm.rows.len()))
            .unwrap_or_default()
            .iter()
            .map(|row| {
                let rendered = self.renderer.render(row.item, row.index, row.selected);
                if cursor == Some(row.index) {
                    format!("{} {}", marker, rendered)
                } else {
                    format!("  {}", rendered)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn view_footer(&self) -> String {
        let mut footer = String::new();
        if self.state.loading {
            footer.push_str(
                &self
                    .styles
                    .loader
                    .clone()
                    .render(&format!("Loading{}", self.loading_spinner.view())),
            );
            footer.push('\n');
        }

        let status = match (self.len(), self.view.cursor()) {
            (0, _) => String::new(),
            (n, Some(cursor)) => format!("{}/{} items", cursor + 1, n),
            (n, None) => format!("{} items", n),
        };
        if !status.is_empty() {
            let more = if self.state.continuation { " (more)" } else { "" };
            footer.push_str(&self.styles.status_bar.clone().render(&format!("{}{}", status, more)));
            footer.push('\n');
        }

        let help = self
            .keymap
            .short_help()
            .iter()
            .map(|b| format!("{} {}", b.help().key, b.help().desc))
            .collect::<Vec<_>>()
            .join(&format!(" {} ", BULLET));
        footer.push_str(&self.styles.help.clone().render(&help));
        footer
    }

    /// Renders the list.
    pub fn view(&self) -> String {
        let mut sections = Vec::new();
        if let Some(header) = self.view_header() {
            sections.push(header);
        }
        if self.state.refreshing {
            sections.push(
                self.styles
                    .refresh
                    .clone()
                    .render(&format!("{}Refreshing", self.refresh_spinner.view())),
            );
        }
        let items = self.view_items();
        if !items.is_empty() {
            sections.push(items);
        }
        sections.push(self.view_footer());
        sections.join("\n")
    }
}
