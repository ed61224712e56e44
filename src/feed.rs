//! An accumulating, paginated view over the user list.
//!
//! [`UserFeed`] is the state behind an infinite-scroll list: it keeps every
//! summary received so far and a page cursor, and appends one page at a time.
//! All mutation goes through `&mut self`, so two page loads can never
//! overlap and the accumulated order is always the arrival order.

use crate::{
    error::Result,
    users::{self, ListOptions, UserSummary},
};
use tracing::instrument;

/// Accumulates pages of [`UserSummary`] in arrival order.
///
/// The feed is append-only: entries are never re-sorted, deduplicated or
/// dropped for the lifetime of the feed. The page cursor is zero-based and
/// only ever moves forward, and only after a page has been appended. A
/// failed load leaves the cursor where it was so the same page can be
/// retried.
///
/// # Examples
/// ```no_run
/// use dummyapi_rs::{Client, Error};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Error> {
///     let mut feed = Client::new()?.feed();
///     feed.start().await?;
///     while feed.len() < 50 {
///         // e.g. the rendered list reached its end
///         feed.load_more().await?;
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct UserFeed {
    client: users::Client,
    users: Vec<UserSummary>,
    next_page: u64,
    started: bool,
}

impl UserFeed {
    pub(crate) fn new(client: users::Client) -> Self {
        Self {
            client,
            users: Vec::new(),
            next_page: 0,
            started: false,
        }
    }

    /// Load page zero. The initial load happens at most once: once a start
    /// has succeeded, further calls are no-ops. A failed start leaves the
    /// feed unstarted and can be retried.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        self.load_more().await?;
        Ok(())
    }

    /// Fetch the next page and append its entries, preserving the order of
    /// everything loaded before. Returns the newly appended entries.
    #[instrument(skip(self))]
    pub async fn load_more(&mut self) -> Result<&[UserSummary]> {
        let page = self.next_page;
        let res = self.client.list(ListOptions::page(page)).await?;
        let appended_at = self.users.len();
        self.users.extend(res.data);
        self.next_page = page + 1;
        self.started = true;
        Ok(&self.users[appended_at..])
    }

    /// All users received so far, in arrival order across pages.
    pub fn users(&self) -> &[UserSummary] {
        &self.users
    }

    /// Number of users received so far.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// The page the next [`UserFeed::load_more`] will fetch.
    pub fn next_page(&self) -> u64 {
        self.next_page
    }
}
