//! Resolution of the currently selected user's detail record.
//!
//! A selection can come from two places at once: the navigation path of the
//! surrounding app and the last clicked list entry. [`Selection`] applies the
//! precedence rule (path wins) once per event, and [`DetailResolver`] turns
//! the winning identifier into a fetch of the full record.
//!
//! Fetches are generation-tagged: [`DetailResolver::select`] hands out a
//! [`DetailFetch`] stamped with the current generation and
//! [`DetailResolver::apply`] ignores outcomes of superseded generations, so a
//! slow response can never overwrite a newer selection.

use std::fmt;

use crate::{
    error::{Error, Result},
    users::{self, UserDetail},
};

/// The two possible sources of a selected identifier.
///
/// If a path-derived identifier is present it wins; otherwise the last
/// clicked identifier is used. A leading `/` is stripped from the winner so
/// a raw navigation path like `/61f0287b` yields a usable id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    path: Option<String>,
    clicked: Option<String>,
}

impl Selection {
    /// A selection derived from a navigation path, e.g. `/61f0287b`.
    pub fn from_path<S: Into<String>>(path: S) -> Self {
        Self {
            path: Some(path.into()),
            clicked: None,
        }
    }

    /// A selection derived from a clicked list entry.
    pub fn from_click<S: Into<String>>(id: S) -> Self {
        Self {
            path: None,
            clicked: Some(id.into()),
        }
    }

    /// Both sources at once; `path` takes precedence when present.
    pub fn new<P, C>(path: Option<P>, clicked: Option<C>) -> Self
    where
        P: Into<String>,
        C: Into<String>,
    {
        Self {
            path: path.map(Into::into),
            clicked: clicked.map(Into::into),
        }
    }

    /// Evaluate the precedence rule and return the selected identifier, if
    /// any. An empty result (no sources, or a bare `/` path) is `None`.
    pub fn resolve(&self) -> Option<&str> {
        let raw = self.path.as_deref().or_else(|| self.clicked.as_deref())?;
        let id = raw.strip_prefix('/').unwrap_or(raw);
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }
}

/// The phases of the detail view.
///
/// `Idle` is only reachable before the first selection; once any id has been
/// selected the resolver cycles between `Loading`, `Loaded` and `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    /// No identifier has ever been selected.
    Idle,
    /// A fetch for the selected identifier is outstanding.
    Loading,
    /// The last settled fetch succeeded.
    Loaded,
    /// The last settled fetch failed.
    Error,
}

/// A generation-tagged detail fetch handed out by [`DetailResolver::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a DetailFetch does nothing until run"]
pub struct DetailFetch {
    id: String,
    generation: u64,
}

impl DetailFetch {
    /// The identifier this fetch is for.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Execute the fetch. Feed the outcome back into
    /// [`DetailResolver::apply`].
    pub async fn run(self, client: &users::Client) -> DetailOutcome {
        let result = client.get(&self.id).await;
        DetailOutcome {
            generation: self.generation,
            result,
        }
    }
}

/// The settled result of a [`DetailFetch`].
#[derive(Debug)]
pub struct DetailOutcome {
    generation: u64,
    result: Result<UserDetail>,
}

/// Holds the selected identifier and the detail record fetched for it.
///
/// Single writer: the resolver is the only thing that mutates its record,
/// and it does so only through [`DetailResolver::apply`]. On a failed fetch
/// the previous record is kept, so the view can keep showing stale-but-valid
/// data next to the recorded error.
///
/// # Examples
/// ```no_run
/// use dummyapi_rs::{Client, DetailResolver, Error, Selection};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Error> {
///     let client = Client::new()?;
///     let mut resolver = DetailResolver::new();
///
///     // Click and navigation arrive as one event; the path wins.
///     let selection = Selection::new(Some("/61f0287b"), Some("60d0fe4f"));
///     if let Some(fetch) = resolver.select(&selection) {
///         let outcome = fetch.run(&client.users).await;
///         resolver.apply(outcome);
///     }
///     assert_eq!(resolver.selected_id(), Some("61f0287b"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct DetailResolver {
    selected: Option<String>,
    detail: Option<UserDetail>,
    error: Option<Error>,
    loading: bool,
    generation: u64,
}

impl DetailResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection event. Returns the fetch to run for it, or `None`
    /// if the selection resolves to no identifier (an empty selection never
    /// triggers a fetch).
    ///
    /// Selecting supersedes any outstanding fetch: its outcome will be
    /// discarded by [`DetailResolver::apply`].
    pub fn select(&mut self, selection: &Selection) -> Option<DetailFetch> {
        let id = selection.resolve()?;
        self.selected = Some(id.to_string());
        self.generation += 1;
        self.loading = true;
        Some(DetailFetch {
            id: id.to_string(),
            generation: self.generation,
        })
    }

    /// Apply a settled fetch outcome.
    ///
    /// Outcomes from superseded generations are dropped wholesale, so only
    /// the latest request's result is ever applied. For the current generation,
    /// success replaces the record and clears any previous error; failure
    /// records the error and leaves the record at its previous value. Either
    /// way the loading flag is cleared.
    pub fn apply(&mut self, outcome: DetailOutcome) {
        if outcome.generation != self.generation {
            return;
        }
        self.loading = false;
        match outcome.result {
            Ok(detail) => {
                self.detail = Some(detail);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
    }

    /// Select, fetch and apply in one step, for callers that drive the
    /// resolver sequentially.
    pub async fn resolve(&mut self, client: &users::Client, selection: &Selection) {
        if let Some(fetch) = self.select(selection) {
            let outcome = fetch.run(client).await;
            self.apply(outcome);
        }
    }

    /// The identifier selected last, if any was ever selected.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The detail record of the last successful fetch. Kept across failed
    /// fetches.
    pub fn detail(&self) -> Option<&UserDetail> {
        self.detail.as_ref()
    }

    /// The error of the last settled fetch, cleared by the next success.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// True while a fetch for the current generation is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The current phase of the detail view.
    pub fn phase(&self) -> DetailPhase {
        if self.selected.is_none() {
            DetailPhase::Idle
        } else if self.loading {
            DetailPhase::Loading
        } else if self.error.is_some() {
            DetailPhase::Error
        } else {
            DetailPhase::Loaded
        }
    }
}

impl fmt::Display for DetailPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DetailPhase::Idle => "idle",
            DetailPhase::Loading => "loading",
            DetailPhase::Loaded => "loaded",
            DetailPhase::Error => "error",
        };
        f.write_str(s)
    }
}
