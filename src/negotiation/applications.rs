//! Application sets advertised in a CER/CEA and the negotiated outcome.

use serde::{Deserialize, Serialize};

use crate::avp::{
    Avp, ACCT_APPLICATION_ID, AUTH_APPLICATION_ID, RELAY_APPLICATION_ID,
    VENDOR_SPECIFIC_APPLICATION_ID,
};
use crate::dict::{AppType, ApplicationLookup};
use crate::error::DiamError;

use super::error::NegotiationError;
use super::role::Role;
use super::validate::{validate_all, Accepted};
use super::vendor::handle_group;

/// Accepted JSON shapes for advertised applications
#[derive(Deserialize)]
#[serde(untagged)]
enum CapabilityInput {
    /// Top-level AVPs of the message
    Avps(Vec<Avp>),
    /// Already sorted lists
    Applications(CapabilityApplications),
}

/// Application id AVPs advertised by the peer, in wire order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilityApplications {
    /// Acct-Application-Id AVPs
    #[serde(default)]
    pub acct_application_ids: Vec<Avp>,
    /// Auth-Application-Id AVPs
    #[serde(default)]
    pub auth_application_ids: Vec<Avp>,
    /// Vendor-Specific-Application-Id AVPs
    #[serde(default)]
    pub vendor_specific_application_ids: Vec<Avp>,
}

impl CapabilityApplications {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the application AVPs from a message's top-level AVPs.
    ///
    /// Base-protocol AVPs are sorted into the three lists by code. Everything
    /// else (Origin-Host, Host-IP-Address, ...) is ignored, as are AVPs with a
    /// header Vendor-Id, whose codes live in the vendor's own space.
    pub fn from_avps(avps: &[Avp]) -> Self {
        let mut apps = Self::default();
        for avp in avps.iter().filter(|avp| avp.vendor_id.is_none()) {
            match avp.code {
                ACCT_APPLICATION_ID => apps.acct_application_ids.push(avp.clone()),
                AUTH_APPLICATION_ID => apps.auth_application_ids.push(avp.clone()),
                VENDOR_SPECIFIC_APPLICATION_ID => {
                    apps.vendor_specific_application_ids.push(avp.clone());
                },
                _ => {},
            }
        }
        apps
    }

    /// Read advertised applications from JSON.
    ///
    /// Accepts either an array of the message's top-level AVPs or an object
    /// with `acct_application_ids`, `auth_application_ids` and
    /// `vendor_specific_application_ids` lists; any other key is rejected.
    pub fn from_json(input: &str) -> crate::error::Result<Self> {
        let parsed: CapabilityInput = serde_json::from_str(input)
            .map_err(|e| DiamError::InvalidInput(format!("Expected AVP array or object: {e}")))?;
        Ok(match parsed {
            CapabilityInput::Avps(avps) => Self::from_avps(&avps),
            CapabilityInput::Applications(apps) => apps,
        })
    }

    /// Add an Acct-Application-Id AVP
    pub fn with_acct(mut self, avp: Avp) -> Self {
        self.acct_application_ids.push(avp);
        self
    }

    /// Add an Auth-Application-Id AVP
    pub fn with_auth(mut self, avp: Avp) -> Self {
        self.auth_application_ids.push(avp);
        self
    }

    /// Add a Vendor-Specific-Application-Id AVP
    pub fn with_vendor_specific(mut self, avp: Avp) -> Self {
        self.vendor_specific_application_ids.push(avp);
        self
    }

    /// Whether no application AVP was advertised at all
    pub fn is_empty(&self) -> bool {
        self.acct_application_ids.is_empty()
            && self.auth_application_ids.is_empty()
            && self.vendor_specific_application_ids.is_empty()
    }

    /// Check that the peer shares at least one application with us.
    ///
    /// Steps, in order:
    /// 1. Acct-Application-Ids; a failing list stops negotiation.
    /// 2. Auth-Application-Ids; same.
    /// 3. Vendor-Specific-Application-Ids, all of them. If none passes,
    ///    the first failure is returned.
    /// 4. If no id was accepted: [`NegotiationError::MissingApplication`] for
    ///    a client, [`NegotiationError::NoCommonApplication`] for a server.
    ///
    /// Each call starts from an empty accepted set.
    pub fn parse<D>(
        &self,
        dict: &D,
        role: Role,
    ) -> Result<NegotiatedApplications, NegotiationError>
    where
        D: ApplicationLookup + ?Sized,
    {
        let mut accepted = Accepted::default();

        validate_all(dict, AppType::Acct, &self.acct_application_ids, &mut accepted)?;
        validate_all(dict, AppType::Auth, &self.auth_application_ids, &mut accepted)?;

        if !self.vendor_specific_application_ids.is_empty() {
            let mut success = false;
            let mut first_failure = None;

            // No short-circuit: later groups still add their ids
            for group in &self.vendor_specific_application_ids {
                match handle_group(dict, group, &mut accepted) {
                    Ok(()) => success = true,
                    Err(err) => {
                        if first_failure.is_none() {
                            first_failure = Some(err);
                        }
                    },
                }
            }

            if let (false, Some(err)) = (success, first_failure) {
                tracing::debug!("No Vendor-Specific-Application-Id passed: {}", err);
                return Err(err);
            }
        }

        if accepted.is_empty() {
            tracing::debug!("No application accepted ({} side)", role);
            return Err(match role {
                Role::Client => NegotiationError::MissingApplication,
                Role::Server => NegotiationError::NoCommonApplication,
            });
        }

        Ok(accepted.finish())
    }
}

/// Applications both peers support
///
/// Ids appear in the order they were accepted. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NegotiatedApplications {
    ids: Vec<u32>,
    ignored: usize,
}

impl NegotiatedApplications {
    pub(super) fn new(ids: Vec<u32>, ignored: usize) -> Self {
        Self { ids, ignored }
    }

    /// Accepted application ids
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Take the accepted ids
    pub fn into_ids(self) -> Vec<u32> {
        self.ids
    }

    /// Whether `id` was accepted
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Whether the peer advertised the relay application
    pub fn is_relay(&self) -> bool {
        self.contains(RELAY_APPLICATION_ID)
    }

    /// Number of accepted ids, duplicates included
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing was accepted
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// How many advertised ids were skipped as unknown
    pub fn ignored(&self) -> usize {
        self.ignored
    }
}
