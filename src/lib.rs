//! The Rust SDK for the Dummy API user directory.
//!
//! If you're just getting started, take a look at the [`Client`].
//! It contains all methods you'll need to interact with the API.
//!
//! For the stateful pieces, the accumulating paginated list and the
//! selected-user detail view, see [`UserFeed`] and [`DetailResolver`].
//!
//! # Examples
//! ```no_run
//! use dummyapi_rs::{Client, DetailResolver, Error, Selection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::new()?;
//!
//!     // Load the first two pages of the directory.
//!     let mut feed = client.feed();
//!     feed.start().await?;
//!     feed.load_more().await?;
//!     println!("{} users loaded", feed.len());
//!
//!     // Resolve the detail record for a clicked entry.
//!     let mut resolver = DetailResolver::new();
//!     let selection = Selection::from_click(&feed.users()[0].id);
//!     resolver.resolve(&client.users, &selection).await;
//!     if let Some(detail) = resolver.detail() {
//!         println!("{} {} <{}>", detail.first_name, detail.last_name, detail.email);
//!     }
//!
//!     Ok(())
//! }
//! ```
pub mod client;
pub mod detail;
pub mod error;
pub mod feed;
mod http;
mod serde;

pub mod users;

pub use client::Client;
pub use detail::{DetailPhase, DetailResolver, Selection};
pub use error::Error;
pub use feed::UserFeed;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

#[cfg(all(feature = "default-tls", feature = "native-tls"))]
compile_error!("Feature \"default-tls\" and \"native-tls\" cannot be enabled at the same time");

#[cfg(all(feature = "native-tls", feature = "rustls-tls"))]
compile_error!("Feature \"native-tls\" and \"rustls-tls\" cannot be enabled at the same time");

#[cfg(all(feature = "rustls-tls", feature = "default-tls"))]
compile_error!("Feature \"rustls-tls\" and \"default-tls\" cannot be enabled at the same time");
