use futures::stream::{self, Stream, TryStreamExt};
use std::fmt;
use tracing::instrument;

use crate::{error::Result, http, users::model::*};

/// Provides methods to work with the users of the directory.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: http::Client,
}

impl Client {
    pub(crate) fn new(http_client: http::Client) -> Self {
        Self { http_client }
    }

    /// List one page of users.
    ///
    /// Pages are zero-based and hold [`PAGE_SIZE`] entries unless the options
    /// override the limit.
    #[instrument(skip(self))]
    pub async fn list(&self, options: ListOptions) -> Result<ListPage> {
        let query_params = serde_qs::to_string(&options)?;
        self.http_client
            .get(format!("/user?{}", query_params))
            .await?
            .json()
            .await
    }

    /// Get the full record of a user by its id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: impl fmt::Display + fmt::Debug) -> Result<UserDetail> {
        self.http_client
            .get(format!("/user/{}", id))
            .await?
            .json()
            .await
    }

    /// Walk the whole directory page by page, yielding users in arrival
    /// order. Stops after the first short page.
    pub fn stream(&self) -> impl Stream<Item = Result<UserSummary>> {
        let client = self.clone();
        stream::try_unfold((client, 0u64, false), |(client, page, done)| async move {
            if done {
                return Ok::<_, crate::error::Error>(None);
            }
            let res = client.list(ListOptions::page(page)).await?;
            if res.data.is_empty() {
                return Ok(None);
            }
            let done = (res.data.len() as u64) < PAGE_SIZE;
            let items = stream::iter(res.data.into_iter().map(Ok));
            Ok(Some((items, (client, page + 1, done))))
        })
        .try_flatten()
    }

    /// Create a new user.
    #[instrument(skip(self))]
    pub async fn create(&self, req: CreateUserRequest) -> Result<UserDetail> {
        self.http_client
            .post("/user/create", &req)
            .await?
            .json()
            .await
    }

    /// Update a user with the given id.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: impl fmt::Display + fmt::Debug,
        req: UpdateUserRequest,
    ) -> Result<UserDetail> {
        self.http_client
            .put(format!("/user/{}", id), &req)
            .await?
            .json()
            .await
    }

    /// Delete the user with the given id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: impl fmt::Display + fmt::Debug) -> Result<()> {
        self.http_client.delete(format!("/user/{}", id)).await
    }
}
