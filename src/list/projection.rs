//! Pure projection of the list state into what a view shows.

use super::types::Item;
use super::Model;

/// One row as the view should render it.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a, I> {
    /// Position in the item list.
    pub index: usize,
    /// The item.
    pub item: &'a I,
    /// Resolved selection: the selected id in single-select mode, the
    /// item's own mark otherwise.
    pub selected: bool,
}

/// Everything a view needs, derived from the current state alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel<'a, I> {
    /// Every item, in order.
    pub rows: Vec<RowView<'a, I>>,
    /// A load-more is in flight.
    pub show_loading_footer: bool,
    /// No items and no refresh in flight, and the placeholder is enabled.
    pub show_empty: bool,
    /// A refresh is in flight.
    pub refreshing: bool,
    /// Placeholder text.
    pub empty_text: &'a str,
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Derives the view model. Takes `&self`: projecting never changes state.
    pub fn view_model(&self) -> ViewModel<'_, I> {
        let rows = self
            .state
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| RowView {
                index,
                item,
                selected: self.is_selected(index),
            })
            .collect();

        ViewModel {
            rows,
            show_loading_footer: self.state.loading,
            show_empty: self.config.show_empty
                && self.state.items.is_empty()
                && !self.state.refreshing,
            refreshing: self.state.refreshing,
            empty_text: &self.config.empty_text,
        }
    }
}
