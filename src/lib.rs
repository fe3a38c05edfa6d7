//! NewsRank API client library.
//!
//! A thin typed pass-through over the NewsRank REST API (articles, stories,
//! search, entities, sources, graph, meta/usage): each call builds one URL,
//! attaches a bearer-token header, performs one HTTP request, and decodes
//! the JSON response. Failures are classified by status code into
//! [`Error`]. There is no retrying, caching, or pagination iteration;
//! callers drive those themselves.
//!
//! The client comes in two flavors with identical surfaces:
//! - [`Client`]: async (default), suspends at the network-await point
//! - [`blocking::Client`]: every call completes on the calling thread
//!
//! # Quick start
//!
//! ```no_run
//! use newsrank::{Client, Page};
//!
//! # async fn example() -> newsrank::Result<()> {
//! let nr = Client::new("nrf_your_api_key");
//!
//! // Top stories
//! if let Some(stories) = nr.stories().ranked(Some(5)).await? {
//!     for story in stories["items"].as_array().into_iter().flatten() {
//!         println!("{}", story["title"]);
//!     }
//! }
//!
//! // Search articles
//! let results = nr.search().articles("climate change", Page::default()).await?;
//! # let _ = results;
//! nr.close();
//! # Ok(())
//! # }
//! ```
//!
//! Responses are untyped [`serde_json::Value`] pass-throughs; `Ok(None)` is
//! the no-content result for HTTP 204 / empty-body successes. Errors carry
//! the status code and raw body for diagnostics:
//!
//! ```no_run
//! use newsrank::{Client, Error};
//!
//! # async fn example() -> newsrank::Result<()> {
//! let nr = Client::new("nrf_your_api_key");
//! match nr.stories().get(42).await {
//!     Ok(story) => println!("{story:?}"),
//!     Err(Error::RateLimit(failure)) => eprintln!("back off: {failure}"),
//!     Err(other) => return Err(other),
//! }
//! # Ok(())
//! # }
//! ```

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod async_impl;
pub mod blocking;
mod error;
mod filters;
mod http;

pub use async_impl::{
    Articles, Client, ClientBuilder, Entities, Graph, Meta, Search, Sources, Stories, Transport,
};
pub use error::{ApiFailure, Error, ErrorBody, Result};
pub use filters::{ArticleFilter, EntityFilter, Page, StoryFilter};
pub use http::Query;
