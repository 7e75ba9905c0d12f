//! Core types and traits for the paged list.
//!
//! - [`Item`]: identity plus the optional per-item `selected` mark
//! - [`ItemDelegate`]: custom row rendering
//! - [`Renderer`]: custom delegate or the built-in fallback
//! - [`Page`], [`FetchParams`], [`InitialData`]: the data exchanged with a source

use super::defaultitem::DefaultDelegate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of an item within one loaded collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Integer identity.
    Int(i64),
    /// String identity.
    Str(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{}", n),
            ItemId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Int(n)
    }
}

impl From<i32> for ItemId {
    fn from(n: i32) -> Self {
        ItemId::Int(i64::from(n))
    }
}

impl From<u32> for ItemId {
    fn from(n: u32) -> Self {
        ItemId::Int(i64::from(n))
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Str(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Str(s)
    }
}

/// Trait for items held by the paged list.
///
/// Identity must be unique within one loaded collection; single selection is
/// tracked by id. The `selected` mark is independent of single selection and
/// is flipped by [`Model::toggle_at`](super::Model::toggle_at).
///
/// # Examples
///
/// ```
/// use bubbletea_paged_list::list::{Item, ItemId};
///
/// #[derive(Clone)]
/// struct Song {
///     id: u32,
///     title: String,
///     marked: bool,
/// }
///
/// impl Item for Song {
///     fn id(&self) -> ItemId {
///         ItemId::from(self.id)
///     }
///     fn selected(&self) -> bool {
///         self.marked
///     }
///     fn set_selected(&mut self, selected: bool) {
///         self.marked = selected;
///     }
/// }
/// ```
pub trait Item: Clone {
    /// The item's identity.
    fn id(&self) -> ItemId;

    /// The per-item mark. Items without one report `false`.
    fn selected(&self) -> bool {
        false
    }

    /// Sets the per-item mark. Items without one ignore it.
    fn set_selected(&mut self, _selected: bool) {}

    /// Text used by the fallback renderer.
    fn label(&self) -> String {
        self.id().to_string()
    }
}

/// Custom row rendering.
///
/// `selected` is already resolved: in single-select mode it reflects the
/// selected id, otherwise the item's own mark.
pub trait ItemDelegate<I: Item> {
    /// Renders one row.
    fn render(&self, item: &I, index: usize, selected: bool) -> String;
}

impl<I, F> ItemDelegate<I> for F
where
    I: Item,
    F: Fn(&I, usize, bool) -> String,
{
    fn render(&self, item: &I, index: usize, selected: bool) -> String {
        self(item, index, selected)
    }
}

/// The rendering capability of a list: a caller-supplied delegate, or the
/// built-in fallback.
pub enum Renderer<I: Item> {
    /// Caller-supplied delegate.
    Custom(Box<dyn ItemDelegate<I> + Send>),
    /// Built-in fallback.
    Default(DefaultDelegate),
}

impl<I: Item> Renderer<I> {
    /// Renders one row with whichever variant is active.
    pub fn render(&self, item: &I, index: usize, selected: bool) -> String {
        match self {
            Renderer::Custom(delegate) => delegate.render(item, index, selected),
            Renderer::Default(delegate) => delegate.render(item, index, selected),
        }
    }
}

impl<I: Item> Default for Renderer<I> {
    fn default() -> Self {
        Renderer::Default(DefaultDelegate::new())
    }
}

impl<I: Item> fmt::Debug for Renderer<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderer::Custom(_) => f.write_str("Renderer::Custom"),
            Renderer::Default(d) => f.debug_tuple("Renderer::Default").field(d).finish(),
        }
    }
}

/// Arguments of one data source call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchParams {
    /// Page to fetch.
    pub page_index: usize,
    /// Requested number of items.
    pub page_size: usize,
}

/// One fetch's worth of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<I> {
    /// Items in display order.
    pub items: Vec<I>,
    /// The page index the source believes it returned. Informational only:
    /// the list records the index it asked for.
    pub page_index: Option<usize>,
    /// Whether more pages exist after this one.
    pub continuation: bool,
}

impl<I> Page<I> {
    /// A page with the given items and continuation flag.
    pub fn new(items: Vec<I>, continuation: bool) -> Self {
        Self {
            items,
            page_index: None,
            continuation,
        }
    }

    /// Records the index the source believes it returned.
    pub fn with_page_index(mut self, page_index: usize) -> Self {
        self.page_index = Some(page_index);
        self
    }
}

/// Seed for a list created with data already on hand.
#[derive(Debug, Clone)]
pub struct InitialData<I> {
    /// Items shown before the first fetch.
    pub items: Vec<I>,
    /// Page the seed items correspond to. Defaults to the configured
    /// initial page.
    pub page_index: Option<usize>,
    /// Whether load-more may run against the seed.
    pub continuation: bool,
}

impl<I> Default for InitialData<I> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_index: None,
            continuation: false,
        }
    }
}
