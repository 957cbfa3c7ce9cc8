//! cpi-rs
//!
//! A lightweight Rust library for retrieving, classifying, normalizing, and
//! charting Consumer Price Index time series from the BLS Public Data API.
//! Pairs with the `cpi` CLI.
//!
//! ### Features
//! - Validate a query year range before any network call
//! - Fetch the raw series for one product id over an inclusive year range
//! - Classify the response (accepted / invalid product / unauthorized / not processed)
//! - Normalize nested per-period records into flat, chart-ready arrays
//! - Render SVG/PNG line charts and quick summary statistics
//!
//! ### Example
//! ```no_run
//! use cpi_rs::{Client, YearRange, classify, normalize, viz};
//!
//! let range = YearRange::new(2009, 2019)?;
//! let client = Client::default();
//! let fetched = client.fetch("CUUR0000SA0", range)?;
//! if classify::classify(&fetched.payload, "CUUR0000SA0", fetched.status_code).is_accepted() {
//!     let series = normalize::normalize(&fetched.payload.results.series)?;
//!     viz::plot_series(&series, "cpi.svg", 1000, 600)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod classify;
pub mod models;
pub mod normalize;
pub mod stats;
pub mod viz;

pub use api::{Client, FetchedSeries, TransportError};
pub use classify::Outcome;
pub use models::{NormalizedSeries, RangeError, YearRange};
pub use normalize::NormalizationError;
