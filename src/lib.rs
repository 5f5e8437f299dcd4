//! # Diam - Diameter Capabilities-Exchange Application Negotiation
//!
//! Decides whether a Diameter peer shares at least one application with the
//! local node during the Capabilities-Exchange (CER/CEA) handshake of
//! RFC 6733, and which applications the session may then use.
//!
//! ## Features
//!
//! - **Application negotiation**: Acct-, Auth- and Vendor-Specific-Application-Id checks
//! - **Relay support**: the relay id `0xFFFFFFFF` is accepted unconditionally
//! - **Dictionary**: embedded base applications plus TOML dictionary files
//! - **Result-code mapping**: failures map to the Result-Code and Failed-AVP of the CEA
//!
//! ## Protocol Overview
//!
//! ```text
//! Client (initiator)                Server (responder)
//!    |                                |
//!    |------ CER (app ids) --------->|  CapabilityApplications::parse(dict, Server)
//!    |<----- CEA (app ids) ----------|  or CEA with 5010 / 5004 + Failed-AVP
//!    |                                |
//!    |  parse(dict, Client)          |
//!    |  MissingApplication => local  |
//!    |  misconfiguration             |
//!    |                                |
//!    |====== application traffic ===>|  restricted to the negotiated ids
//! ```
//!
//! Transport, the peer state machine, the AVP codec and building the CEA
//! itself are left to the layers around this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use diam::{Avp, CapabilityApplications, Dictionary, Role};
//!
//! let dict = Dictionary::new();
//!
//! // Application AVPs decoded from a received CER
//! let cer = vec![
//!     Avp::acct_application_id(3),
//!     Avp::vendor_specific_application_id(10415, Avp::auth_application_id(16777251)),
//! ];
//!
//! let negotiated = CapabilityApplications::from_avps(&cer)
//!     .parse(&dict, Role::Server)
//!     .unwrap();
//! assert_eq!(negotiated.ids(), &[3, 16777251]);
//! ```
//!
//! ## Modules
//!
//! - [`avp`]: AVP shapes and well-known codes
//! - [`dict`]: Application dictionary
//! - [`negotiation`]: Application negotiation
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod avp;
pub mod config;
pub mod dict;
pub mod error;
pub mod negotiation;

// Re-exports for convenience
pub use avp::{Avp, AvpData, RELAY_APPLICATION_ID};
pub use config::Config;
pub use dict::{AppType, Application, ApplicationLookup, Dictionary};
pub use error::{DiamError, Result};
pub use negotiation::{CapabilityApplications, NegotiatedApplications, NegotiationError, Role};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
