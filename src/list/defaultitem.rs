//! Ready-made item and the fallback renderer.
//!
//! [`Record`] is an item with an id, the optional `selected` mark and any
//! number of extra JSON fields, which round-trip untouched. [`DefaultDelegate`]
//! is the renderer used when no custom delegate is installed: it prints the
//! item's label with a cursor-style marker for selected rows.
//!
//! ```rust
//! use bubbletea_paged_list::list::{Item, ItemId, Record};
//!
//! let r = Record::new(5).with_field("title", "Item 5");
//! assert_eq!(r.id(), ItemId::Int(5));
//! assert_eq!(r.label(), "Item 5");
//! ```

use super::types::{Item, ItemId};
use lipgloss_extras::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An item with an identity, an optional mark and pass-through fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identity.
    pub id: ItemId,
    /// Per-item mark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    /// Everything else the source sent.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Creates a record with no extra fields.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            fields: Map::new(),
        }
    }

    /// Adds an extra field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Looks up an extra field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl Item for Record {
    fn id(&self) -> ItemId {
        self.id.clone()
    }

    fn selected(&self) -> bool {
        self.selected.unwrap_or(false)
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = Some(selected);
    }

    // "title" when present, otherwise the whole record as JSON.
    fn label(&self) -> String {
        if let Some(Value::String(title)) = self.fields.get("title") {
            return title.clone();
        }
        serde_json::to_string(self).unwrap_or_else(|_| self.id.to_string())
    }
}

/// Styles used by the fallback renderer.
#[derive(Debug, Clone)]
pub struct DefaultItemStyles {
    /// Row in normal state.
    pub normal: Style,
    /// Row when selected.
    pub selected: Style,
}

impl Default for DefaultItemStyles {
    fn default() -> Self {
        Self {
            normal: Style::new()
                .foreground(Color::from("#dddddd"))
                .padding(0, 0, 0, 2),
            selected: Style::new()
                .border_style(lipgloss::normal_border())
                .border_left(true)
                .border_left_foreground(Color::from("#AD58B4"))
                .foreground(Color::from("#EE6FF8"))
                .padding(0, 0, 0, 1),
        }
    }
}

/// Fallback renderer.
#[derive(Debug, Clone, Default)]
pub struct DefaultDelegate {
    /// Row styles.
    pub styles: DefaultItemStyles,
}

impl DefaultDelegate {
    /// Creates the fallback renderer with default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one row.
    pub fn render<I: Item>(&self, item: &I, _index: usize, selected: bool) -> String {
        let label = item.label();
        if selected {
            self.styles.selected.render(&label)
        } else {
            self.styles.normal.render(&label)
        }
    }
}
