//! Application negotiation for the capabilities exchange.
//!
//! Implements the RFC 6733 §5.3 rule that a peer must share at least one
//! application with us, as checked on a received CER (server side) or CEA
//! (client side).
//!
//! # Procedure
//!
//! ```text
//! CapabilityApplications::parse
//!    |
//!    |-- Acct-Application-Id list ----> validate_all ---> validate (per AVP)
//!    |-- Auth-Application-Id list ----> validate_all ---> validate (per AVP)
//!    |-- Vendor-Specific-Application-Id
//!    |        (each group) -----------> handle_group ---> validate (per nested AVP)
//!    v
//! accepted ids empty? -> MissingApplication (client) / NoCommonApplication (server)
//! ```
//!
//! ## Per-AVP rules
//!
//! | Input                                  | Outcome                          |
//! |----------------------------------------|----------------------------------|
//! | Wrong AVP code or non-Unsigned32 data  | `UnexpectedAvp(avp)`             |
//! | Relay id `0xFFFFFFFF`                  | accepted, dictionary not used    |
//! | Id not in dictionary                   | ignored, not an error            |
//! | Id declared with the other type        | `NoCommonApplication`            |
//! | Id declared with same type, or untyped | accepted                         |
//!
//! ## List rules
//!
//! - Acct/Auth lists: one passing AVP is enough; otherwise the first failure.
//! - A vendor group reports the outcome of its *last* nested application id.
//! - Vendor groups: one passing group is enough; otherwise the first failure.
//!
//! # Usage
//!
//! ```
//! use diam::avp::Avp;
//! use diam::dict::Dictionary;
//! use diam::negotiation::{CapabilityApplications, NegotiationError, Role};
//!
//! let dict = Dictionary::new();
//!
//! let cer = vec![Avp::acct_application_id(3), Avp::auth_application_id(4)];
//! let negotiated = CapabilityApplications::from_avps(&cer)
//!     .parse(&dict, Role::Server)
//!     .unwrap();
//! assert_eq!(negotiated.ids(), &[3, 4]);
//!
//! let unknown = CapabilityApplications::new().with_acct(Avp::acct_application_id(77));
//! let err = unknown.parse(&dict, Role::Server).unwrap_err();
//! assert_eq!(err, NegotiationError::NoCommonApplication);
//! assert_eq!(err.result_code(), 5010);
//! ```

mod applications;
mod error;
mod role;
mod validate;
mod vendor;

pub use applications::{CapabilityApplications, NegotiatedApplications};
pub use error::{
    NegotiationError, DIAMETER_INVALID_AVP_VALUE, DIAMETER_MISSING_AVP,
    DIAMETER_NO_COMMON_APPLICATION,
};
pub use role::Role;
