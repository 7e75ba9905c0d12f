//! Data sources.
//!
//! A [`DataSource`] answers page requests. It owns transport, timeouts and
//! retries; the list only asks for a page and records what comes back.
//! `Ok(None)` means the source succeeded without data.
//!
//! Closures returning a future can be used directly through [`source_fn`]:
//!
//! ```rust
//! use bubbletea_paged_list::list::{source_fn, FetchParams, Page, Record};
//!
//! let source = source_fn(|params: FetchParams| async move {
//!     let start = (params.page_index * params.page_size) as i64;
//!     let items = (start..start + params.page_size as i64).map(Record::new).collect();
//!     Ok(Some(Page::new(items, params.page_index < 4)))
//! });
//! # let _ = source;
//! ```

use super::error::FetchError;
use super::types::{FetchParams, Page};
use async_trait::async_trait;
use std::future::Future;
use std::marker::PhantomData;

/// Result of one page request.
pub type FetchResult<I> = Result<Option<Page<I>>, FetchError>;

/// Asynchronous page provider.
#[async_trait]
pub trait DataSource<I>: Send + Sync {
    /// Fetches one page.
    async fn fetch_page(&self, params: FetchParams) -> FetchResult<I>;
}

/// Adapts a closure into a [`DataSource`].
pub struct FnSource<F, I> {
    f: F,
    _item: PhantomData<fn() -> I>,
}

/// Wraps `f` as a data source.
pub fn source_fn<F, Fut, I>(f: F) -> FnSource<F, I>
where
    F: Fn(FetchParams) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = FetchResult<I>> + Send + 'static,
{
    FnSource {
        f,
        _item: PhantomData,
    }
}

#[async_trait]
impl<F, Fut, I> DataSource<I> for FnSource<F, I>
where
    F: Fn(FetchParams) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = FetchResult<I>> + Send + 'static,
    I: Send + 'static,
{
    async fn fetch_page(&self, params: FetchParams) -> FetchResult<I> {
        (self.f)(params).await
    }
}
