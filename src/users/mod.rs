//! Browse and manage the users of the directory.
//!
//! You're probably looking for the [`Client`].
//!
//! # Examples
//! ```no_run
//! use dummyapi_rs::{Client, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::new()?;
//!
//!     // First page of the directory, ten entries.
//!     let page = client.users.list(Default::default()).await?;
//!     for user in &page.data {
//!         println!("{} {}", user.first_name, user.last_name);
//!     }
//!
//!     // Full record for a single user.
//!     let detail = client.users.get(&page.data[0].id).await?;
//!     println!("{}", detail.email);
//!
//!     Ok(())
//! }
//! ```
mod client;
mod model;

pub use client::Client;
pub use model::*;
