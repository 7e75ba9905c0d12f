//! Command handle for code that does not own the list.
//!
//! A [`Handle`] is a narrow, cloneable command object. Commands travel over a
//! channel and are applied by the list on its own update loop; state flows
//! back as [`Snapshot`]s on a watch channel. Holders never reach the list's
//! state directly.
//!
//! ```rust
//! use bubbletea_paged_list::list::{source_fn, Config, FetchParams, Model, Page, Record};
//!
//! let source = source_fn(|_p: FetchParams| async { Ok(Some(Page::new(vec![Record::new(1)], false))) });
//! let list = Model::new(source, Config::default());
//! let handle = list.handle();
//! handle.refresh().unwrap();
//! assert!(handle.get_items().is_empty()); // not applied until the list runs the command
//! ```

use super::error::HandleError;
use super::state::Snapshot;
use super::types::Item;
use super::Model;
use bubbletea_rs::{Cmd, Msg};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// A command sent through a [`Handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Scroll the view back to the first row.
    ScrollToTop,
    /// Refresh from the initial page.
    Refresh,
    /// Clear the refresh indicator.
    StopRefresh,
    /// Flip the mark of the item at this index.
    ChangeItemSelect(usize),
    /// Clear the single selection.
    ClearSelection,
}

/// Delivers a handle command to the list it was sent to.
#[derive(Debug, Clone)]
pub struct CommandMsg {
    /// Id of the target list.
    pub list_id: i64,
    /// The command.
    pub command: Command,
}

/// Cloneable command object for a [`Model`].
#[derive(Debug)]
pub struct Handle<I> {
    list_id: i64,
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot<I>>,
}

impl<I> Clone for Handle<I> {
    fn clone(&self) -> Self {
        Self {
            list_id: self.list_id,
            commands: self.commands.clone(),
            snapshots: self.snapshots.clone(),
        }
    }
}

impl<I: Clone> Handle<I> {
    /// Id of the list this handle drives.
    pub fn list_id(&self) -> i64 {
        self.list_id
    }

    fn send(&self, command: Command) -> Result<(), HandleError> {
        self.commands.send(command).map_err(|_| HandleError::Closed)
    }

    /// Scrolls the view back to the first row.
    pub fn scroll_to_top(&self) -> Result<(), HandleError> {
        self.send(Command::ScrollToTop)
    }

    /// Requests a refresh. Ignored by the list if one is in flight.
    pub fn refresh(&self) -> Result<(), HandleError> {
        self.send(Command::Refresh)
    }

    /// Clears the refresh indicator without waiting for the fetch.
    pub fn stop_refresh(&self) -> Result<(), HandleError> {
        self.send(Command::StopRefresh)
    }

    /// Flips the mark of the item at `index`.
    pub fn change_item_select(&self, index: usize) -> Result<(), HandleError> {
        self.send(Command::ChangeItemSelect(index))
    }

    /// Clears the single selection.
    pub fn clear_selection(&self) -> Result<(), HandleError> {
        self.send(Command::ClearSelection)
    }

    /// A copy of the items as last published. Changing it does not affect
    /// the list.
    pub fn get_items(&self) -> Vec<I> {
        self.snapshots.borrow().items.clone()
    }

    /// The state as last published.
    pub fn snapshot(&self) -> Snapshot<I> {
        self.snapshots.borrow().clone()
    }

    /// Waits for the next published state.
    pub async fn changed(&mut self) -> Result<Snapshot<I>, HandleError> {
        self.snapshots
            .changed()
            .await
            .map_err(|_| HandleError::Closed)?;
        Ok(self.snapshots.borrow_and_update().clone())
    }
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Returns a command handle for this list.
    ///
    /// Commands are applied once the program runs the command returned by
    /// [`listen`](Model::listen), which the list's own `update` re-arms.
    pub fn handle(&self) -> Handle<I> {
        self.snapshot_tx.send_replace(Snapshot::from(&self.state));
        Handle {
            list_id: self.id,
            commands: self.commands_tx.clone(),
            snapshots: self.snapshot_tx.subscribe(),
        }
    }

    /// Waits for the next handle command.
    ///
    /// Resolves to a [`CommandMsg`], or to nothing once every sender is gone.
    pub fn listen(&self) -> Cmd {
        let rx = Arc::clone(&self.commands_rx);
        let list_id = self.id;
        Box::pin(async move {
            let command = rx.lock().await.recv().await?;
            Some(Box::new(CommandMsg { list_id, command }) as Msg)
        })
    }

    /// Applies a handle command.
    pub fn apply(&mut self, command: Command) -> Option<Cmd> {
        tracing::debug!(tag = %self.config.tag, ?command, "handle command");
        match command {
            Command::ScrollToTop => {
                self.scroll_to_top();
                None
            }
            Command::Refresh => self.refresh(),
            Command::StopRefresh => {
                self.stop_refresh();
                None
            }
            Command::ChangeItemSelect(index) => {
                self.toggle_at(index);
                None
            }
            Command::ClearSelection => {
                self.clear_selection();
                None
            }
        }
    }
}
