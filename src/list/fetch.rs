//! Refresh and load-more orchestration.
//!
//! At most one of `refreshing`/`loading` is set. A refresh restarts from the
//! configured initial page and replaces the items; a load-more fetches
//! `page_index + 1` and appends. Either failure mode (an error or an empty
//! result) clears the fetch's flag and turns `continuation` off, so an
//! exhausted or failing source is not polled again until the next refresh.
//!
//! Every fetch is tagged with the refresh epoch it was issued in. Issuing a
//! refresh starts a new epoch, and completions from an older epoch are
//! dropped, so a load-more overtaken by a refresh never appends to the new
//! items.

use super::error::FetchFailure;
use super::source::{DataSource, FetchResult};
use super::state::Phase;
use super::types::{FetchParams, Item};
use super::Model;
use bubbletea_rs::{Cmd, Msg};
use std::sync::Arc;

/// Which transition issued a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Pull-to-refresh: replaces the items.
    Refresh,
    /// Infinite scroll: appends to the items.
    LoadMore,
}

/// Delivers a finished fetch back to the list that issued it.
#[derive(Debug)]
pub struct FetchDoneMsg<I> {
    /// Id of the issuing list.
    pub list_id: i64,
    /// Kind of fetch.
    pub kind: FetchKind,
    /// Page that was requested.
    pub page_index: usize,
    /// What the source returned.
    pub result: FetchResult<I>,
    epoch: u64,
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Reloads the list from the initial page.
    ///
    /// Returns `None` without side effects while a refresh is in flight.
    /// A load-more in flight is superseded: its result will be dropped.
    /// The indicator animates when the command comes back through
    /// [`update`](Model::update) or [`init`](Model::init).
    pub fn refresh(&mut self) -> Option<Cmd> {
        let epoch = self.epoch + 1;
        if !self.guard.try_arm(epoch) {
            tracing::debug!(tag = %self.config.tag, "refresh ignored: already in flight");
            return None;
        }
        self.epoch = epoch;
        self.state.refreshing = true;
        self.state.loading = false;
        self.state.continuation = false;
        self.loading_spinner.stop();

        let page_index = self.config.initial_page_index;
        tracing::debug!(tag = %self.config.tag, page_index, epoch, "refresh issued");
        self.publish();
        Some(self.fetch_cmd(FetchKind::Refresh, page_index))
    }

    /// Fetches the page after the last one loaded and appends it.
    ///
    /// Returns `None` when there are no items yet, when a fetch is in flight
    /// or when the source reported no continuation.
    pub fn load_more(&mut self) -> Option<Cmd> {
        if self.state.items.is_empty() {
            return None;
        }
        if self.state.phase() != Phase::Idle || self.guard.is_armed() {
            tracing::debug!(tag = %self.config.tag, "load more ignored: fetch in flight");
            return None;
        }
        if !self.state.continuation {
            // Drop the stale intent; only a refresh re-enables loading.
            self.state.continuation = false;
            tracing::debug!(tag = %self.config.tag, "load more ignored: no continuation");
            return None;
        }

        self.state.loading = true;
        let page_index = self.state.page_index + 1;
        tracing::debug!(tag = %self.config.tag, page_index, "load more issued");
        self.publish();
        Some(self.fetch_cmd(FetchKind::LoadMore, page_index))
    }

    /// Clears the refresh indicator without waiting for the fetch.
    ///
    /// The outstanding fetch still completes and its items are applied, but
    /// it no longer owns `refreshing`.
    pub fn stop_refresh(&mut self) {
        self.guard.disarm();
        self.state.refreshing = false;
        self.refresh_spinner.stop();
        tracing::debug!(tag = %self.config.tag, "refresh stopped");
        self.publish();
    }

    fn fetch_cmd(&self, kind: FetchKind, page_index: usize) -> Cmd {
        let source: Arc<dyn DataSource<I>> = Arc::clone(&self.source);
        let params = FetchParams {
            page_index,
            page_size: self.config.page_size,
        };
        let list_id = self.id;
        let epoch = self.epoch;

        Box::pin(async move {
            let result = source.fetch_page(params).await;
            Some(Box::new(FetchDoneMsg {
                list_id,
                kind,
                page_index,
                result,
                epoch,
            }) as Msg)
        })
    }

    /// Applies a finished fetch. Returns a load-more command if the view
    /// reached its end as a result.
    pub(super) fn complete(&mut self, done: FetchDoneMsg<I>) -> Option<Cmd> {
        if done.epoch != self.epoch {
            tracing::debug!(
                tag = %self.config.tag,
                kind = ?done.kind,
                "dropping fetch superseded by a newer refresh"
            );
            return None;
        }

        let failure = match done.kind {
            FetchKind::Refresh => self.complete_refresh(done),
            FetchKind::LoadMore => self.complete_load_more(done),
        };

        if let Some(FetchFailure::Error(err)) = &failure {
            tracing::warn!(tag = %self.config.tag, error = %err, "fetch failed");
            if let Some(observer) = self.on_error.as_mut() {
                observer(err);
            }
        }

        self.publish();
        self.sync_view()
    }

    fn complete_refresh(&mut self, done: FetchDoneMsg<I>) -> Option<FetchFailure> {
        // Only the refresh holding the guard may clear it; a stopped one
        // must leave `refreshing` alone.
        if self.guard.held_by(done.epoch) {
            self.guard.disarm();
            self.state.refreshing = false;
            self.refresh_spinner.stop();
        }
        let failure = match done.result {
            Ok(Some(page)) => {
                if page.page_index.is_some_and(|p| p != done.page_index) {
                    tracing::debug!(
                        tag = %self.config.tag,
                        requested = done.page_index,
                        reported = ?page.page_index,
                        "source reported a different page index"
                    );
                }
                self.state.items = page.items;
                self.state.page_index = done.page_index;
                self.state.continuation = page.continuation;
                self.rearm_view();
                None
            }
            Ok(None) => {
                self.state.items.clear();
                self.state.continuation = false;
                self.rearm_view();
                Some(FetchFailure::EmptyResult)
            }
            Err(err) => {
                self.state.continuation = false;
                Some(FetchFailure::Error(err))
            }
        };

        if self.state.prune_selection() {
            tracing::debug!(tag = %self.config.tag, "selection cleared: item no longer loaded");
            if let Some(observer) = self.on_selection_change.as_mut() {
                observer(None);
            }
        }
        tracing::debug!(
            tag = %self.config.tag,
            items = self.state.items.len(),
            continuation = self.state.continuation,
            "refresh completed"
        );
        failure
    }

    fn complete_load_more(&mut self, done: FetchDoneMsg<I>) -> Option<FetchFailure> {
        self.state.loading = false;
        self.loading_spinner.stop();

        let failure = match done.result {
            Ok(Some(page)) => {
                self.state.items.extend(page.items);
                self.state.page_index = done.page_index;
                self.state.continuation = page.continuation;
                None
            }
            Ok(None) => {
                self.state.continuation = false;
                Some(FetchFailure::EmptyResult)
            }
            Err(err) => {
                self.state.continuation = false;
                Some(FetchFailure::Error(err))
            }
        };
        tracing::debug!(
            tag = %self.config.tag,
            items = self.state.items.len(),
            page_index = self.state.page_index,
            continuation = self.state.continuation,
            "load more completed"
        );
        failure
    }

    // New rows are a new approach to the end, even at the same length.
    fn rearm_view(&mut self) {
        self.view.set_len(self.state.items.len());
        self.view.reset_end_reached();
    }

    /// Pushes the item count to the view and follows up on end-reached.
    pub(super) fn sync_view(&mut self) -> Option<Cmd> {
        self.view.set_len(self.state.items.len());
        if self.view.take_end_reached() {
            return self.load_more();
        }
        None
    }
}
