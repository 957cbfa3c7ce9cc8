//! Decide whether a fetched response is usable, and if not, why.
//!
//! The API reports failures two ways at once: in the HTTP status of the
//! transport and in the `status`/`message` fields embedded in the body. The
//! checks below form an ordered list and the first match wins; reordering
//! them changes observable behavior on payloads that match several
//! conditions (an unknown series delivered with HTTP 401 still classifies
//! as [`Outcome::InvalidProduct`]).

use crate::models::ApiResponse;

/// Result of inspecting one fetched response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The payload is usable; the pipeline may continue.
    Accepted,
    /// The queried series id is unknown to the API.
    InvalidProduct,
    /// The caller is not allowed to query the endpoint.
    Unauthorized,
    /// The API declined to process the request (throttling or quota).
    RateLimitedOrUnprocessed,
}

impl Outcome {
    /// Fixed user-facing message; `None` for [`Outcome::Accepted`].
    pub fn user_message(self) -> Option<&'static str> {
        match self {
            Outcome::Accepted => None,
            Outcome::InvalidProduct => Some("Sorry, the product ID was incorrect."),
            Outcome::Unauthorized => {
                Some("Sorry, you are not authorized to query this endpoint.")
            }
            Outcome::RateLimitedOrUnprocessed => Some(
                "Sorry, your request could not be processed; the daily quota for unregistered users may be exhausted.",
            ),
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

/// Classify a decoded payload together with its transport status code.
pub fn classify(payload: &ApiResponse, product_id: &str, status_code: u16) -> Outcome {
    let missing_series = format!("Series does not exist for Series {}", product_id);
    if payload.message.iter().any(|m| m.contains(&missing_series))
        || status_code == 404
        || status_code == 400
    {
        return Outcome::InvalidProduct;
    }
    if status_code == 401 {
        return Outcome::Unauthorized;
    }
    if payload.status == "REQUEST_NOT_PROCESSED" || status_code == 429 {
        return Outcome::RateLimitedOrUnprocessed;
    }
    Outcome::Accepted
}
