use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_default;

/// The fixed page size served by the list endpoint.
pub const PAGE_SIZE: u64 = 10;

/// A single entry of the paginated user list.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// The user's unique identifier.
    pub id: String,
    /// An optional honorific ("mr", "ms", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    /// URL of the user's avatar.
    pub picture: String,
}

/// The full record of a single user, as returned by the detail endpoint.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    /// The user's unique identifier.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    /// URL of the user's avatar.
    pub picture: String,
    pub gender: String,
    pub email: String,
    /// Date of birth, ISO-8601 on the wire.
    pub date_of_birth: DateTime<Utc>,
    pub phone: u64,
}

/// One page of the user list.
///
/// Only `data` is guaranteed; the paging metadata mirrors whatever the server
/// echoes back and defaults to zero when absent.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct ListPage {
    #[serde(deserialize_with = "deserialize_null_default", default)]
    pub data: Vec<UserSummary>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Query parameters for [`Client::list`](crate::users::Client::list).
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ListOptions {
    /// Zero-based page to fetch.
    pub page: u64,
    /// Page size, [`PAGE_SIZE`] unless overridden.
    pub limit: u64,
}

impl ListOptions {
    /// Options for the given page at the default page size.
    pub fn page(page: u64) -> Self {
        Self {
            page,
            limit: PAGE_SIZE,
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::page(0)
    }
}

/// Payload for creating a user. `first_name`, `last_name` and `email` are
/// required by the API, everything else is optional.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl CreateUserRequest {
    pub fn new<F, L, E>(first_name: F, last_name: L, email: E) -> Self
    where
        F: Into<String>,
        L: Into<String>,
        E: Into<String>,
    {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            title: None,
            gender: None,
            date_of_birth: None,
            phone: None,
            picture: None,
        }
    }
}

/// Payload for updating a user. Unset fields are left untouched server-side;
/// the email is immutable and can't be part of an update.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}
