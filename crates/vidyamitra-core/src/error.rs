//! Client error types.
//!
//! Every failure a workflow can surface is a `CoachError`. The variants fall
//! into three groups: validation (bad input caught before any network I/O),
//! transport (the service said no, or said something unparseable), and state
//! (a workflow method called out of order). None of them is fatal to the
//! process; each is scoped to the single action that triggered it.

use thiserror::Error;

/// Errors surfaced by the Vidyamitra client.
#[derive(Debug, Error)]
pub enum CoachError {
    /// Required client-side input was missing or invalid. No request was sent.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The service returned a non-2xx status. The status code alone is
    /// authoritative; the API defines no structured error body.
    #[error("{operation} failed (HTTP {status})")]
    Api { operation: &'static str, status: u16 },

    /// The request never completed (connection refused, timeout, DNS).
    #[error("{operation} failed: {message}")]
    Network {
        operation: &'static str,
        message: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("{operation} returned a malformed response: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    /// A finalize was attempted before any questions were issued.
    #[error("no {0} session in progress")]
    NotReady(&'static str),

    /// An answer slot or option index outside the valid range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A second submit was attempted while one was already in flight.
    #[error("a request for this session is already in flight")]
    Busy,

    /// The response arrived after a newer session had begun and was discarded.
    #[error("session was superseded by a newer request")]
    Superseded,
}

impl CoachError {
    /// Returns `true` for transport-level failures (paired with no retry:
    /// the failure is surfaced verbatim to the caller).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CoachError::Api { .. } | CoachError::Network { .. } | CoachError::Decode { .. }
        )
    }

    /// Returns `true` for workflow invariant violations.
    pub fn is_state(&self) -> bool {
        matches!(
            self,
            CoachError::NotReady(_)
                | CoachError::IndexOutOfRange { .. }
                | CoachError::Busy
                | CoachError::Superseded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(CoachError::Api {
            operation: "quiz generation",
            status: 500
        }
        .is_transport());
        assert!(CoachError::NotReady("quiz").is_state());
        assert!(!CoachError::Validation("empty role".into()).is_transport());
        assert!(!CoachError::Validation("empty role".into()).is_state());
    }

    #[test]
    fn display_includes_operation() {
        let err = CoachError::Api {
            operation: "quiz submission",
            status: 503,
        };
        assert_eq!(err.to_string(), "quiz submission failed (HTTP 503)");
    }
}
