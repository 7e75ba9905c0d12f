#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-paged-list/")]

//! # bubbletea-paged-list
//!
//! A paginated list component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: pull-to-refresh, infinite scroll and single selection layered
//! on top of a windowed list view.
//!
//! ## Overview
//!
//! The list controller follows the Elm Architecture. [`list::Model`] owns the
//! state, returns commands for the asynchronous page fetches and applies
//! their results in `update()`. Pages come from a [`list::DataSource`]; the
//! rows are drawn through a [`viewport::ListView`], of which
//! [`viewport::Model`] is the terminal implementation.
//!
//! ## Features
//!
//! - **Refresh** replaces the items with the configured initial page
//! - **Load more** appends the next page while the source reports more
//! - **Single selection** by item id, plus an independent per-item mark
//! - **Command handle** for code that does not own the list
//! - **Structured logging** through `tracing`, tagged per list
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_paged_list::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     list: PagedList<Record>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let source = source_fn(|p: FetchParams| async move {
//!             let first = (p.page_index * p.page_size) as i64;
//!             let items = (first..first + p.page_size as i64)
//!                 .map(|n| Record::new(n).with_field("title", format!("Row {}", n)))
//!                 .collect();
//!             Ok(Some(Page::new(items, p.page_index < 5)))
//!         });
//!
//!         let mut list = PagedList::new(source, Config::default().with_height(12))
//!             .with_header("Rows");
//!         let mut cmds: Vec<Cmd> = list.init().into_iter().collect();
//!         cmds.push(list.listen());
//!         (Self { list }, Some(bubbletea_rs::batch(cmds)))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.list.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.list.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! Transitions are logged at `debug` and failures at `warn`, each with the
//! list's `tag` as a field. Install any `tracing` subscriber to see them.

pub mod key;
pub mod list;
pub mod spinner;
pub mod viewport;

pub use key::{Binding, Help as KeyHelp, KeyPress};
pub use list::Model as PagedList;
pub use list::{
    Config as PagedListConfig, DataSource, FetchError, Handle as PagedListHandle, Item, ItemId,
    Page, Record,
};
pub use spinner::{Model as Spinner, TickMsg as SpinnerTickMsg};
pub use viewport::{ListView, Model as Viewport};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_paged_list::prelude::*;
///
/// let config = Config::default().with_single_select(true);
/// assert!(config.single_select);
/// ```
pub mod prelude {
    pub use crate::key::{Binding, KeyPress};
    pub use crate::list::{
        source_fn, Command, Config, DataSource, FetchError, FetchParams, FetchResult, Handle,
        HandleError, InitialData, Item, ItemDelegate, ItemId, ListKeyMap, ListStyles, Page,
        Phase, Record, Snapshot,
    };
    pub use crate::spinner::Model as Spinner;
    pub use crate::viewport::{ListView, Model as Viewport};
    pub use crate::PagedList;
}
