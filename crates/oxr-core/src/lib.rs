//! # OXR Core
//!
//! Typed async client for the Open Exchange Rates API.
//!
//! ## Overview
//!
//! Each API resource is one `async` method on [`Client`]. Calls turn typed
//! arguments into a GET request (URL, `app_id`, normalized query string),
//! execute it through an [`HttpClient`] transport and decode the JSON body
//! into a response record. There is no retry, caching or rate limiting; every
//! failure is handed back to the caller as a [`ClientError`].
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`Client`] operations and [`RatesOptions`] |
//! | [`config`] | [`ClientConfig`] and `OXR_*` environment loading |
//! | [`domain`] | [`Currency`], [`Period`], ISO date helpers |
//! | [`endpoint`] | [`Endpoint`] identifiers and URL templates |
//! | [`error`] | [`ClientError`] and [`ValidationError`] |
//! | [`http_client`] | Transport trait, reqwest and offline implementations |
//! | [`query`] | Query parameter model and wire encoding |
//! | [`responses`] | Response records per endpoint |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oxr_core::{Client, ClientConfig, Currency, RatesOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::new("your-app-id")?)?;
//!
//!     let options = RatesOptions::new()
//!         .with_symbols(Currency::parse_list(["EUR", "GBP"])?);
//!     let rates = client.latest(options).await?;
//!
//!     println!("1 {} = {:?} EUR", rates.base, rates.rate("EUR"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Callers can tell bad input, an unreachable host and an API rejection apart:
//!
//! ```rust
//! use oxr_core::{ClientError, ClientErrorKind};
//!
//! fn describe(error: &ClientError) -> &'static str {
//!     match error.kind() {
//!         ClientErrorKind::Validation => "fix the arguments",
//!         ClientErrorKind::Connectivity => "check the network",
//!         ClientErrorKind::Status => "the API said no",
//!         ClientErrorKind::Decode => "unexpected response body",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The app id is never logged and is redacted from `Debug` output
//! - `app_id` is always injected from [`ClientConfig`]; a caller-supplied value is overwritten

pub mod client;
pub mod config;
pub mod domain;
pub mod endpoint;
pub mod error;
pub mod http_client;
pub mod query;
pub mod responses;

pub use client::{Client, RatesOptions};

pub use config::{ClientConfig, DEFAULT_BASE_CURRENCY, DEFAULT_BASE_URL};

pub use domain::{Currency, Period};

pub use endpoint::Endpoint;

pub use error::{ClientError, ClientErrorKind, ValidationError};

pub use http_client::{
    HttpClient, HttpError, HttpFuture, HttpRequest, HttpResponse, ReqwestHttpClient,
    StaticHttpClient,
};

pub use query::{QueryParams, QueryValue};

pub use responses::{
    Conversion, ConversionMeta, ConversionRequest, Currencies, Ohlc, OhlcRate, Rates, TimeSeries,
    Usage, UsageCounters, UsageData, UsagePlan,
};
