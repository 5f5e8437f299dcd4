//! Negotiation failures.
//!
//! Each variant maps onto the Result-Code the CEA (or the client's
//! decision to drop the peer) should carry.

use thiserror::Error;

use crate::avp::Avp;

/// DIAMETER_INVALID_AVP_VALUE
pub const DIAMETER_INVALID_AVP_VALUE: u32 = 5004;

/// DIAMETER_MISSING_AVP
pub const DIAMETER_MISSING_AVP: u32 = 5005;

/// DIAMETER_NO_COMMON_APPLICATION
pub const DIAMETER_NO_COMMON_APPLICATION: u32 = 5010;

/// Why application negotiation failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NegotiationError {
    /// The AVP's code or payload shape is wrong for its position.
    ///
    /// Carries the offending AVP so it can be echoed in Failed-AVP.
    #[error("Unexpected AVP: {0}")]
    UnexpectedAvp(Avp),

    /// No advertised application is known locally with a matching type.
    #[error("No common application")]
    NoCommonApplication,

    /// Client side only: nothing was accepted, the local node is misconfigured.
    #[error("Missing application")]
    MissingApplication,
}

impl NegotiationError {
    /// The AVP to report in Failed-AVP, if the failure names one
    pub fn failed_avp(&self) -> Option<&Avp> {
        match self {
            NegotiationError::UnexpectedAvp(avp) => Some(avp),
            _ => None,
        }
    }

    /// RFC 6733 Result-Code for a rejection built from this failure
    pub fn result_code(&self) -> u32 {
        match self {
            NegotiationError::UnexpectedAvp(_) => DIAMETER_INVALID_AVP_VALUE,
            NegotiationError::NoCommonApplication => DIAMETER_NO_COMMON_APPLICATION,
            NegotiationError::MissingApplication => DIAMETER_MISSING_AVP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_avp() {
        let avp = Avp::acct_application_id(3);
        let err = NegotiationError::UnexpectedAvp(avp.clone());
        assert_eq!(err.failed_avp(), Some(&avp));
        assert_eq!(err.result_code(), 5004);

        assert!(NegotiationError::NoCommonApplication.failed_avp().is_none());
        assert_eq!(NegotiationError::NoCommonApplication.result_code(), 5010);
        assert_eq!(NegotiationError::MissingApplication.result_code(), 5005);
    }

    #[test]
    fn test_display() {
        let err = NegotiationError::UnexpectedAvp(Avp::auth_application_id(1));
        assert_eq!(err.to_string(), "Unexpected AVP: Auth-Application-Id(258) = 1");
    }
}
