//! Synchronous client for the **BLS Public Data API (v2)** timeseries
//! endpoint.
//!
//! This module covers the `timeseries/data/{seriesID}.json` endpoint and
//! returns the decoded payload together with the transport status code.
//!
//! ### Notes
//! - One call performs exactly one round trip; transient failures are
//!   reported, never retried.
//! - Status-code *semantics* (unknown series, unauthorized, throttled) are a
//!   separate concern, handled by [`classify`](crate::classify); this module
//!   only distinguishes "the body is JSON" from "it is not".
//!
//! Typical usage:
//! ```no_run
//! # use cpi_rs::{Client, YearRange};
//! let client = Client::default();
//! let fetched = client.fetch("CUUR0000SA0", YearRange::new(2009, 2019)?)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::models::{ApiResponse, YearRange};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use thiserror::Error;

/// Failure modes of the single fetch round trip.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The round trip itself failed (connection, DNS, TLS, ...).
    #[error("network error: {0}")]
    Request(#[from] reqwest::Error),
    /// The body arrived but is not valid JSON.
    #[error("Error while loading JSON: the response body could not be decoded.")]
    MalformedPayload(#[source] serde_json::Error),
}

/// Decoded payload plus the transport status code it arrived with.
#[derive(Debug, Clone)]
pub struct FetchedSeries {
    pub payload: ApiResponse,
    pub status_code: u16,
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .user_agent(concat!("cpi_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "http://api.bls.gov/publicAPI/v2/timeseries/data".into(),
            http,
        }
    }
}

// Allow -, _, . unescaped in ids (common for series ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

impl Client {
    /// Fetch the raw series for one product id over an inclusive year range.
    ///
    /// Builds `GET {base_url}/{product_id}.json?startyear=..&endyear=..` and
    /// performs one blocking round trip. The HTTP status is captured and
    /// returned alongside the decoded body for downstream classification.
    ///
    /// ### Errors
    /// - [`TransportError::Request`] when the round trip fails outright
    /// - [`TransportError::MalformedPayload`] when the body is not JSON
    pub fn fetch(
        &self,
        product_id: &str,
        range: YearRange,
    ) -> Result<FetchedSeries, TransportError> {
        let id = percent_encoding::utf8_percent_encode(product_id.trim(), SAFE);
        let url = format!("{}/{}.json", self.base_url, id);
        log::debug!(
            "GET {} startyear={} endyear={}",
            url,
            range.start,
            range.end
        );

        let resp = self
            .http
            .get(&url)
            .query(&[("startyear", range.start), ("endyear", range.end)])
            .send()?;
        let status_code = resp.status().as_u16();
        let body = resp.text()?;

        let payload: ApiResponse =
            serde_json::from_str(&body).map_err(TransportError::MalformedPayload)?;
        Ok(FetchedSeries {
            payload,
            status_code,
        })
    }
}
