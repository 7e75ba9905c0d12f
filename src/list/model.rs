//! The `Model` struct: construction, builder options and accessors.

use super::config::Config;
use super::error::FetchError;
use super::handle::Command;
use super::keys::ListKeyMap;
use super::source::DataSource;
use super::state::{ControllerState, Snapshot, TransitionGuard};
use super::style::ListStyles;
use super::types::{InitialData, Item, ItemDelegate, Renderer};
use crate::spinner;
use crate::viewport::{self, ListView};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, watch, Mutex};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

pub(super) type PressObserver<I> = Box<dyn FnMut(&I, usize) + Send>;
pub(super) type SelectionObserver<I> = Box<dyn FnMut(Option<&I>) + Send>;
pub(super) type ErrorObserver = Box<dyn FnMut(&FetchError) + Send>;
pub(super) type EmptyView = Box<dyn Fn() -> String + Send>;

/// A paginated list controller.
///
/// `Model<I>` owns the list state, talks to a [`DataSource`] and drives a
/// [`ListView`]. Refresh replaces the items with the configured initial page;
/// load-more appends the next page while the source reports a continuation.
/// The two never run at the same time.
///
/// Asynchronous work is returned as bubbletea-rs commands. Their results come
/// back through [`update`](Model::update).
///
/// # Examples
///
/// ```
/// use bubbletea_paged_list::list::{source_fn, Config, FetchParams, Model, Page, Record};
///
/// let source = source_fn(|p: FetchParams| async move {
///     let first = (p.page_index * p.page_size) as i64;
///     let items = (first..first + p.page_size as i64).map(Record::new).collect();
///     Ok(Some(Page::new(items, p.page_index < 2)))
/// });
///
/// let mut list = Model::new(source, Config::default().with_page_size(10));
/// let cmd = list.init(); // auto refresh
/// assert!(cmd.is_some());
/// assert!(list.state().refreshing);
/// ```
pub struct Model<I: Item> {
    pub(super) id: i64,
    pub(super) config: Config,
    pub(super) state: ControllerState<I>,
    pub(super) source: Arc<dyn DataSource<I>>,
    pub(super) renderer: Renderer<I>,
    pub(super) view: Box<dyn ListView + Send>,

    // Fetch bookkeeping
    pub(super) guard: TransitionGuard,
    pub(super) epoch: u64,

    // Observers
    pub(super) on_item_press: Option<PressObserver<I>>,
    pub(super) on_selection_change: Option<SelectionObserver<I>>,
    pub(super) on_error: Option<ErrorObserver>,

    // Command surface
    pub(super) commands_tx: mpsc::UnboundedSender<Command>,
    pub(super) commands_rx: Arc<Mutex<mpsc::UnboundedReceiver<Command>>>,
    pub(super) snapshot_tx: watch::Sender<Snapshot<I>>,

    // UI
    pub(super) header: Option<String>,
    pub(super) empty_view: Option<EmptyView>,
    pub(super) styles: ListStyles,
    pub(super) keymap: ListKeyMap,
    pub(super) refresh_spinner: spinner::Model,
    pub(super) loading_spinner: spinner::Model,
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Creates a list over `source` with no items.
    ///
    /// Nothing is fetched until [`init`](Model::init) or
    /// [`refresh`](Model::refresh) is called.
    pub fn new<S>(source: S, config: Config) -> Self
    where
        S: DataSource<I> + 'static,
    {
        let state = ControllerState::new(Vec::new(), config.initial_page_index, false);
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, _) = watch::channel(Snapshot::from(&state));

        let view = viewport::Model::new(config.height).with_threshold(config.end_reached_threshold);
        let mut keymap = ListKeyMap::default();
        keymap.refresh.set_enabled(!config.refresh_disabled);

        Self {
            id: next_id(),
            state,
            source: Arc::new(source),
            renderer: Renderer::default(),
            view: Box::new(view),
            guard: TransitionGuard::default(),
            epoch: 0,
            on_item_press: None,
            on_selection_change: None,
            on_error: None,
            commands_tx,
            commands_rx: Arc::new(Mutex::new(commands_rx)),
            snapshot_tx,
            header: None,
            empty_view: None,
            styles: ListStyles::default(),
            keymap,
            refresh_spinner: spinner::Model::new().with_spinner(spinner::DOT.clone()),
            loading_spinner: spinner::Model::new().with_spinner(spinner::ELLIPSIS.clone()),
            config,
        }
    }

    /// Seeds the list with data already on hand.
    ///
    /// A seed that already reaches the end of the window loads more as soon
    /// as [`init`](Model::init) runs.
    pub fn with_initial_data(mut self, data: InitialData<I>) -> Self {
        let page_index = data.page_index.unwrap_or(self.config.initial_page_index);
        self.state = ControllerState::new(data.items, page_index, data.continuation);
        self.view.set_len(self.state.items.len());
        self.publish();
        self
    }

    /// Installs a custom row renderer.
    pub fn with_delegate<D>(mut self, delegate: D) -> Self
    where
        D: ItemDelegate<I> + Send + 'static,
    {
        self.renderer = Renderer::Custom(Box::new(delegate));
        self
    }

    /// Replaces the list view.
    pub fn with_view<V>(mut self, view: V) -> Self
    where
        V: ListView + Send + 'static,
    {
        self.view = Box::new(view);
        self.view.set_len(self.state.items.len());
        self
    }

    /// Shows a header line above the rows.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Renders `view` in place of the `empty_text` placeholder.
    pub fn with_empty_view<F>(mut self, view: F) -> Self
    where
        F: Fn() -> String + Send + 'static,
    {
        self.empty_view = Some(Box::new(view));
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings. The refresh binding stays disabled when
    /// the refresh gesture is.
    pub fn with_keymap(mut self, mut keymap: ListKeyMap) -> Self {
        if self.config.refresh_disabled {
            keymap.refresh.set_enabled(false);
        }
        self.keymap = keymap;
        self
    }

    /// Called with every pressed item and its index, before selection runs.
    pub fn on_item_press<F>(mut self, f: F) -> Self
    where
        F: FnMut(&I, usize) + Send + 'static,
    {
        self.on_item_press = Some(Box::new(f));
        self
    }

    /// Called with the newly selected item, or `None` when selection clears.
    pub fn on_selection_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(Option<&I>) + Send + 'static,
    {
        self.on_selection_change = Some(Box::new(f));
        self
    }

    /// Called with every error a data source returns.
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: FnMut(&FetchError) + Send + 'static,
    {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Starts the list: refreshes when `auto_refresh` is set, otherwise
    /// loads more if the seeded rows already reach the end of the window.
    ///
    /// The returned command includes the first indicator tick.
    pub fn init(&mut self) -> Option<bubbletea_rs::Cmd> {
        tracing::debug!(tag = %self.config.tag, "paged list initialized");
        self.view.scroll_to_offset(0, true);
        let cmd = if self.config.auto_refresh {
            self.refresh()
        } else {
            self.sync_view()
        };
        self.with_indicators(cmd.into_iter().collect())
    }

    /// The list configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current state.
    pub fn state(&self) -> &ControllerState<I> {
        &self.state
    }

    /// The loaded items, in display order.
    pub fn items(&self) -> &[I] {
        &self.state.items
    }

    /// A copy of the loaded items.
    pub fn get_items(&self) -> Vec<I> {
        self.state.items.clone()
    }

    /// The list view being driven.
    pub fn list_view(&self) -> &dyn ListView {
        self.view.as_ref()
    }

    /// Number of loaded items.
    pub fn len(&self) -> usize {
        self.state.items.len()
    }

    /// Whether no items are loaded.
    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    /// Scrolls the view back to the first row. State is untouched.
    pub fn scroll_to_top(&mut self) {
        self.view.scroll_to_offset(0, true);
    }

    /// Publishes the current state to every handle. Skipped while no
    /// handle exists; [`handle`](Model::handle) publishes before subscribing.
    pub(super) fn publish(&self) {
        if self.snapshot_tx.receiver_count() == 0 {
            return;
        }
        self.snapshot_tx.send_replace(Snapshot::from(&self.state));
    }
}

impl<I: Item> std::fmt::Debug for Model<I>
where
    I: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}
