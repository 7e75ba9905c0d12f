//! Paginated list controller with pull-to-refresh, infinite scroll and
//! single selection.
//!
//! This module exposes a generic `Model<I: Item>` plus supporting traits and submodules:
//! - `Item`: identity and the optional per-item mark
//! - `DataSource`: asynchronous page provider
//! - `ItemDelegate`: custom row rendering, with `DefaultDelegate` as the fallback
//! - `Handle`: command object for code that does not own the list
//!
//! ## Architecture Overview
//!
//! ### Fetch State Machine
//! `Idle --refresh--> Refreshing --done--> Idle` and
//! `Idle --load more--> LoadingMore --done--> Idle`. A refresh while one is in
//! flight is ignored; a load-more while anything is in flight is ignored.
//! The fetch itself runs as a bubbletea-rs command and its result comes back
//! to [`Model::update`] as a message.
//!
//! ### Two Selection Mechanisms
//! Single selection is tracked by id and driven by presses. The per-item mark
//! is stored on the item and flipped by index. They are independent.
//!
//! ### Command And State Surfaces
//! [`Model::handle`] returns a [`Handle`] that sends commands; state comes
//! back as [`Snapshot`]s. [`Model::view_model`] is the pure projection the
//! view is drawn from.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_paged_list::list::{source_fn, Config, FetchParams, Model, Page, Record};
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let source = source_fn(|p: FetchParams| async move {
//!     let first = (p.page_index * p.page_size) as i64;
//!     let items = (first..first + p.page_size as i64)
//!         .map(|n| Record::new(n).with_field("title", format!("Item {}", n)))
//!         .collect();
//!     Ok(Some(Page::new(items, p.page_index < 1)))
//! });
//!
//! let mut list = Model::new(source, Config::default().with_page_size(10).with_height(5));
//! let fetch = list.refresh().unwrap();
//! let done = fetch.await.unwrap();
//! list.update(done);
//! assert_eq!(list.len(), 10);
//! assert!(list.state().continuation);
//! # }
//! ```

/// Ready-made item and the fallback renderer.
pub mod defaultitem;

/// Key bindings of the list.
pub mod keys;

/// Styles of the list chrome.
pub mod style;

mod config;
mod error;
mod fetch;
mod handle;
mod model;
mod projection;
mod rendering;
mod selection;
mod source;
mod state;
mod types;

pub use config::Config;
pub use defaultitem::{DefaultDelegate, DefaultItemStyles, Record};
pub use error::{FetchError, FetchFailure, HandleError};
pub use fetch::{FetchDoneMsg, FetchKind};
pub use handle::{Command, CommandMsg, Handle};
pub use keys::ListKeyMap;
pub use model::Model;
pub use projection::{RowView, ViewModel};
pub use source::{source_fn, DataSource, FetchResult, FnSource};
pub use state::{ControllerState, Phase, Snapshot, TransitionGuard};
pub use style::ListStyles;
pub use types::{FetchParams, InitialData, Item, ItemDelegate, ItemId, Page, Renderer};

use crate::spinner;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Handles a message.
    ///
    /// - `FetchDoneMsg` for this list: applies the fetch result
    /// - `CommandMsg` for this list: applies the command and listens again
    /// - `spinner::TickMsg`: advances the refresh or loading indicator
    /// - `KeyMsg`: navigation, press, mark, refresh and scroll to top
    ///
    /// Messages addressed to other lists are ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg
            .downcast_ref::<FetchDoneMsg<I>>()
            .is_some_and(|done| done.list_id == self.id)
        {
            let follow_up = match msg.downcast::<FetchDoneMsg<I>>() {
                Ok(done) => self.complete(*done),
                Err(_) => None,
            };
            return self.with_indicators(follow_up.into_iter().collect());
        }

        if let Some(command_msg) = msg.downcast_ref::<CommandMsg>() {
            if command_msg.list_id != self.id {
                return None;
            }
            let mut cmds: Vec<Cmd> = self.apply(command_msg.command).into_iter().collect();
            cmds.push(self.listen());
            return self.with_indicators(cmds);
        }

        if msg.downcast_ref::<spinner::TickMsg>().is_some() {
            return self
                .refresh_spinner
                .update(&msg)
                .or_else(|| self.loading_spinner.update(&msg));
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let cmd = self.handle_key(key_msg);
            return self.with_indicators(cmd.into_iter().collect());
        }

        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.cursor_up.matches(key_msg) {
            self.view.cursor_up();
            self.follow_end_reached()
        } else if self.keymap.cursor_down.matches(key_msg) {
            self.view.cursor_down();
            self.follow_end_reached()
        } else if self.keymap.press.matches(key_msg) {
            if let Some(index) = self.view.cursor() {
                self.press(index);
            }
            None
        } else if self.keymap.toggle_mark.matches(key_msg) {
            if let Some(index) = self.view.cursor() {
                self.toggle_at(index);
            }
            None
        } else if self.keymap.refresh.matches(key_msg) {
            self.refresh()
        } else if self.keymap.scroll_to_top.matches(key_msg) {
            self.scroll_to_top();
            None
        } else {
            None
        }
    }

    fn follow_end_reached(&mut self) -> Option<Cmd> {
        if self.view.take_end_reached() {
            self.load_more()
        } else {
            None
        }
    }

    // Adds indicator ticks for a fetch that just started.
    pub(super) fn with_indicators(&mut self, mut cmds: Vec<Cmd>) -> Option<Cmd> {
        if self.state.refreshing {
            cmds.extend(self.refresh_spinner.start());
        }
        if self.state.loading {
            cmds.extend(self.loading_spinner.start());
        }
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(bubbletea_rs::batch(cmds)),
        }
    }
}

#[cfg(test)]
mod tests;
