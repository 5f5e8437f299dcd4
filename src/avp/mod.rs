//! Attribute-value pairs at the capabilities-exchange boundary.
//!
//! Only the shapes the application check needs are modelled here. The binary
//! codec lives below this crate; what arrives here is an already decoded AVP
//! whose payload is either an `Unsigned32`, a `Grouped` list of nested AVPs,
//! or anything else.
//!
//! # JSON form
//!
//! AVPs serialize with serde so CER fixtures can be written by hand:
//!
//! ```text
//! {"code": 259, "data": {"unsigned32": 3}}
//! {"code": 260, "data": {"grouped": [
//!     {"code": 266, "data": {"unsigned32": 10415}},
//!     {"code": 258, "data": {"unsigned32": 16777251}}
//! ]}}
//! {"code": 258, "data": {"other": "UTF8String"}}
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Auth-Application-Id (RFC 6733 §6.8)
pub const AUTH_APPLICATION_ID: u32 = 258;

/// Acct-Application-Id (RFC 6733 §6.9)
pub const ACCT_APPLICATION_ID: u32 = 259;

/// Vendor-Specific-Application-Id (RFC 6733 §6.11)
pub const VENDOR_SPECIFIC_APPLICATION_ID: u32 = 260;

/// Vendor-Id (RFC 6733 §5.3.3)
pub const VENDOR_ID: u32 = 266;

/// Relay application id: the peer relays every application.
pub const RELAY_APPLICATION_ID: u32 = 0xFFFF_FFFF;

/// Decoded AVP payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvpData {
    /// Unsigned32 value
    Unsigned32(u32),
    /// Grouped AVP with its nested AVPs in wire order
    Grouped(Vec<Avp>),
    /// Any other datatype, kept as its rendered value
    Other(String),
}

/// A decoded AVP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avp {
    /// AVP code
    pub code: u32,
    /// Vendor-Id from the AVP header, when the V bit is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u32>,
    /// Payload
    pub data: AvpData,
}

impl Avp {
    /// Create a base-protocol AVP
    pub fn new(code: u32, data: AvpData) -> Self {
        Self {
            code,
            vendor_id: None,
            data,
        }
    }

    /// Create an Unsigned32 AVP
    pub fn unsigned32(code: u32, value: u32) -> Self {
        Self::new(code, AvpData::Unsigned32(value))
    }

    /// Create a Grouped AVP
    pub fn grouped(code: u32, avps: Vec<Avp>) -> Self {
        Self::new(code, AvpData::Grouped(avps))
    }

    /// Acct-Application-Id carrying `id`
    pub fn acct_application_id(id: u32) -> Self {
        Self::unsigned32(ACCT_APPLICATION_ID, id)
    }

    /// Auth-Application-Id carrying `id`
    pub fn auth_application_id(id: u32) -> Self {
        Self::unsigned32(AUTH_APPLICATION_ID, id)
    }

    /// Vendor-Specific-Application-Id grouping a Vendor-Id and one application id AVP
    pub fn vendor_specific_application_id(vendor_id: u32, application: Avp) -> Self {
        Self::grouped(
            VENDOR_SPECIFIC_APPLICATION_ID,
            vec![Self::unsigned32(VENDOR_ID, vendor_id), application],
        )
    }

    /// Set the header Vendor-Id
    pub fn with_vendor(mut self, vendor_id: u32) -> Self {
        self.vendor_id = Some(vendor_id);
        self
    }

    /// Unsigned32 payload, if that is the shape
    pub fn as_unsigned32(&self) -> Option<u32> {
        match self.data {
            AvpData::Unsigned32(v) => Some(v),
            _ => None,
        }
    }

    /// Nested AVPs, if the payload is grouped
    pub fn as_grouped(&self) -> Option<&[Avp]> {
        match &self.data {
            AvpData::Grouped(avps) => Some(avps),
            _ => None,
        }
    }

    /// Dictionary name of the code, for the handful of codes this crate knows
    pub fn name(&self) -> Option<&'static str> {
        code_name(self.code)
    }
}

/// Name of a well-known base-protocol AVP code
pub fn code_name(code: u32) -> Option<&'static str> {
    match code {
        AUTH_APPLICATION_ID => Some("Auth-Application-Id"),
        ACCT_APPLICATION_ID => Some("Acct-Application-Id"),
        VENDOR_SPECIFIC_APPLICATION_ID => Some("Vendor-Specific-Application-Id"),
        VENDOR_ID => Some("Vendor-Id"),
        _ => None,
    }
}

impl fmt::Display for Avp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}({})", self.code)?,
            None => write!(f, "AVP({})", self.code)?,
        }
        if let Some(vendor) = self.vendor_id {
            write!(f, " vendor={vendor}")?;
        }
        match &self.data {
            AvpData::Unsigned32(v) => write!(f, " = {v}"),
            AvpData::Grouped(avps) => {
                f.write_str(" {")?;
                for (i, avp) in avps.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {avp}")?;
                }
                f.write_str(" }")
            },
            AvpData::Other(raw) => write!(f, " = {raw:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let acct = Avp::acct_application_id(3);
        assert_eq!(acct.code, ACCT_APPLICATION_ID);
        assert_eq!(acct.as_unsigned32(), Some(3));
        assert!(acct.as_grouped().is_none());

        let vs = Avp::vendor_specific_application_id(10415, Avp::auth_application_id(16777251));
        let nested = vs.as_grouped().unwrap();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].code, VENDOR_ID);
        assert_eq!(nested[1].as_unsigned32(), Some(16777251));
    }

    #[test]
    fn test_display() {
        let avp = Avp::acct_application_id(3);
        assert_eq!(avp.to_string(), "Acct-Application-Id(259) = 3");

        let vs = Avp::vendor_specific_application_id(10415, Avp::auth_application_id(4));
        assert_eq!(
            vs.to_string(),
            "Vendor-Specific-Application-Id(260) { Vendor-Id(266) = 10415, Auth-Application-Id(258) = 4 }"
        );

        let odd = Avp::new(999, AvpData::Other("abc".to_string())).with_vendor(10415);
        assert_eq!(odd.to_string(), "AVP(999) vendor=10415 = \"abc\"");
    }

    #[test]
    fn test_json_form() {
        let json = r#"{"code":260,"data":{"grouped":[
            {"code":266,"data":{"unsigned32":10415}},
            {"code":258,"data":{"unsigned32":16777251}}
        ]}}"#;
        let avp: Avp = serde_json::from_str(json).unwrap();
        assert_eq!(
            avp,
            Avp::vendor_specific_application_id(10415, Avp::auth_application_id(16777251))
        );

        let out = serde_json::to_string(&Avp::acct_application_id(3)).unwrap();
        assert_eq!(out, r#"{"code":259,"data":{"unsigned32":3}}"#);
    }
}
