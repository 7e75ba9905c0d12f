//! Single selection and per-item marks.
//!
//! Two mechanisms exist side by side. Single selection tracks one item by id
//! and is driven by presses when `single_select` is configured. The per-item
//! mark lives on the item itself and is flipped by index. Neither touches the
//! other.

use super::types::Item;
use super::Model;

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Handles a press on the row at `index`.
    ///
    /// The press observer always runs first. In single-select mode, pressing
    /// the selected item clears the selection and pressing any other item
    /// moves it there; the selection observer is then called with the new
    /// selection.
    pub fn press(&mut self, index: usize) {
        let Some(item) = self.state.items.get(index) else {
            tracing::warn!(tag = %self.config.tag, index, len = self.state.items.len(), "press out of range");
            return;
        };

        if let Some(observer) = self.on_item_press.as_mut() {
            observer(item, index);
        }
        if !self.config.single_select {
            return;
        }

        let id = item.id();
        let now_selected = if self.state.selected_id.as_ref() == Some(&id) {
            self.state.selected_id = None;
            None
        } else {
            self.state.selected_id = Some(id);
            Some(item)
        };
        tracing::debug!(tag = %self.config.tag, selected = ?self.state.selected_id, "selection changed");

        if let Some(observer) = self.on_selection_change.as_mut() {
            observer(now_selected);
        }
        self.publish();
    }

    /// Flips the mark of the item at `index`. The single selection is left
    /// alone.
    pub fn toggle_at(&mut self, index: usize) {
        let Some(item) = self.state.items.get_mut(index) else {
            tracing::warn!(tag = %self.config.tag, index, "toggle out of range");
            return;
        };
        let marked = !item.selected();
        item.set_selected(marked);
        self.publish();
    }

    /// Clears the single selection. Item marks are left alone.
    pub fn clear_selection(&mut self) {
        self.state.selected_id = None;
        self.publish();
    }

    /// Whether the row at `index` renders as selected: the selected id in
    /// single-select mode, the item's own mark otherwise.
    pub fn is_selected(&self, index: usize) -> bool {
        let Some(item) = self.state.items.get(index) else {
            return false;
        };
        if self.config.single_select {
            self.state.selected_id.as_ref() == Some(&item.id())
        } else {
            item.selected()
        }
    }
}
