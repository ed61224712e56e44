//! The top-level client for the Dummy API.
use std::env;

use crate::{
    error::{Error, Result},
    feed::UserFeed,
    http, users,
};

/// The URL the hosted Dummy API lives at.
static DEFAULT_URL: &str = "https://dummyapi.io/data/v1/";

/// The client is the entrypoint of the whole SDK.
///
/// You can create it using [`Client::builder`] or [`Client::new`].
///
/// # Examples
/// ```no_run
/// use dummyapi_rs::{Client, Error};
///
/// fn main() -> Result<(), Error> {
///     // Create a new client and get the app id from the environment
///     // variable DUMMYAPI_APP_ID.
///     let client = Client::new()?;
///
///     // Set all available options. Unset options fall back to environment
///     // variables.
///     let client = Client::builder()
///         .with_app_id("my-app-id")
///         .build()?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    pub users: users::Client,
}

impl Client {
    /// Creates a new client. If you want to configure it, use [`Client::builder`].
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new client using a builder.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Get the url (cloned).
    pub fn url(&self) -> String {
        self.url.clone()
    }

    /// Create a fresh [`UserFeed`] over this client's users endpoint.
    pub fn feed(&self) -> UserFeed {
        UserFeed::new(self.users.clone())
    }
}

/// This builder is used to create a new client.
pub struct Builder {
    env_fallback: bool,
    url: Option<String>,
    app_id: Option<String>,
}

impl Builder {
    /// Create a new builder.
    fn new() -> Self {
        Self {
            env_fallback: true,
            url: None,
            app_id: None,
        }
    }

    /// Don't fall back to environment variables.
    pub fn no_env(mut self) -> Self {
        self.env_fallback = false;
        self
    }

    /// Add an app id to the client. If this is not set, the app id will be
    /// read from the environment variable `DUMMYAPI_APP_ID`.
    pub fn with_app_id<S: Into<String>>(mut self, app_id: S) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Add an URL to the client. This is only meant for testing purposes, you
    /// don't need to set it.
    #[doc(hidden)]
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let env_fallback = self.env_fallback;

        let mut app_id = self.app_id.unwrap_or_default();
        if app_id.is_empty() && env_fallback {
            app_id = env::var("DUMMYAPI_APP_ID").unwrap_or_default();
        }
        if app_id.is_empty() {
            return Err(Error::MissingAppId);
        }

        let mut url = self.url.unwrap_or_default();
        if url.is_empty() && env_fallback {
            url = env::var("DUMMYAPI_URL").unwrap_or_default();
        }
        if url.is_empty() {
            url = DEFAULT_URL.to_string();
        }

        let http_client = http::Client::new(url.clone(), app_id)?;

        Ok(Client {
            url,
            users: users::Client::new(http_client),
        })
    }
}
