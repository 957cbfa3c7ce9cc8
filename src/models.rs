use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earliest year the public timeseries endpoint serves data for.
pub const EARLIEST_YEAR: i32 = 1995;

/// Inclusive year range for a timeseries query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

/// Why a year range was rejected before any network work.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The end year precedes the start year.
    #[error("You can't specify an end year that precedes the start year.")]
    InvertedRange,
    /// The start year predates the data the source offers.
    #[error("The source has no data before {}; pick a later start year.", EARLIEST_YEAR)]
    UnsupportedEra,
}

impl YearRange {
    /// Validate and build a range. Checks `start <= end` first, then
    /// `start >= EARLIEST_YEAR`. Pure; performs no I/O.
    pub fn new(start: i32, end: i32) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvertedRange);
        }
        if start < EARLIEST_YEAR {
            return Err(RangeError::UnsupportedEra);
        }
        Ok(Self { start, end })
    }
}

/// Decoded payload of the timeseries endpoint.
///
/// Every field tolerates absence: whether the body parses at all is decided
/// at the transport layer, while structural gaps inside an otherwise valid
/// document surface later, during normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    /// API-level status code (e.g. `"REQUEST_SUCCEEDED"`), distinct from the
    /// HTTP status of the transport.
    #[serde(default)]
    pub status: String,
    /// The live API serializes `message` as an array of strings, older
    /// captures as a single string. Accept both and normalize to a vector.
    #[serde(default, deserialize_with = "de_messages")]
    pub message: Vec<String>,
    #[serde(default, rename = "Results")]
    pub results: Results,
}

/// Serde helper: parse a message list from either a JSON string or an array
/// of strings.
fn de_messages<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    struct MessagesVisitor;

    impl<'de> Visitor<'de> for MessagesVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or a sequence of strings")
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![s.to_string()])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut out = Vec::new();
            while let Some(s) = seq.next_element::<String>()? {
                out.push(s);
            }
            Ok(out)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(MessagesVisitor)
}

/// The `Results` envelope around the per-series records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Results {
    #[serde(default)]
    pub series: Vec<SeriesRecord>,
}

/// Raw per-series record from the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRecord {
    #[serde(rename = "seriesID")]
    pub series_id: Option<String>,
    pub data: Option<Vec<SeriesPoint>>,
}

/// One raw observation inside a series. Delivery order within a record is
/// newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: Option<String>,
    #[serde(rename = "periodName")]
    pub period_name: Option<String>,
    pub value: Option<String>,
}

/// Flat, chart-ready series.
///
/// `periods` and `values` are index-aligned (the value at index *i* belongs
/// to the period label at index *i*) and chronologically ascending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedSeries {
    pub series_id: Vec<String>,
    pub periods: Vec<String>,
    pub values: Vec<f64>,
}
