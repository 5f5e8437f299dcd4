//! Vendor-Specific-Application-Id handling.

use crate::avp::Avp;
use crate::dict::{AppType, ApplicationLookup};

use super::error::NegotiationError;
use super::validate::{validate, Accepted};

/// Validate the application ids nested in one Vendor-Specific-Application-Id.
///
/// Every nested Acct-/Auth-Application-Id is validated and may add to
/// `accepted`, but only the outcome of the last one is returned. Other
/// nested AVPs (Vendor-Id) are skipped, so a group with no application
/// id passes.
// TODO: reconcile with validate_all, which keeps the first failure instead of the last.
pub(super) fn handle_group<D>(
    dict: &D,
    group: &Avp,
    accepted: &mut Accepted,
) -> Result<(), NegotiationError>
where
    D: ApplicationLookup + ?Sized,
{
    let nested = group
        .as_grouped()
        .ok_or_else(|| NegotiationError::UnexpectedAvp(group.clone()))?;

    let mut outcome = Ok(());
    for avp in nested {
        if let Some(kind) = AppType::from_avp_code(avp.code) {
            outcome = validate(dict, kind, avp, accepted);
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avp::{
        AvpData, ACCT_APPLICATION_ID, RELAY_APPLICATION_ID, VENDOR_ID,
        VENDOR_SPECIFIC_APPLICATION_ID,
    };
    use crate::dict::{Application, Dictionary};

    fn dict() -> Dictionary {
        Dictionary::empty()
            .with_application(Application::new(3, "Base Accounting", AppType::Acct))
            .with_application(Application::new(16777251, "S6a", AppType::Auth))
    }

    #[test]
    fn test_not_grouped() {
        let avp = Avp::unsigned32(VENDOR_SPECIFIC_APPLICATION_ID, 10415);
        let err = handle_group(&dict(), &avp, &mut Accepted::default()).unwrap_err();
        assert_eq!(err, NegotiationError::UnexpectedAvp(avp));
    }

    #[test]
    fn test_nested_auth_accepted() {
        let mut accepted = Accepted::default();
        let group = Avp::vendor_specific_application_id(10415, Avp::auth_application_id(16777251));

        handle_group(&dict(), &group, &mut accepted).unwrap();
        assert_eq!(accepted.finish().ids(), &[16777251]);
    }

    #[test]
    fn test_nested_relay_accepted() {
        let mut accepted = Accepted::default();
        let group = Avp::vendor_specific_application_id(
            10415,
            Avp::acct_application_id(RELAY_APPLICATION_ID),
        );

        handle_group(&Dictionary::empty(), &group, &mut accepted).unwrap();
        assert_eq!(accepted.finish().ids(), &[RELAY_APPLICATION_ID]);
    }

    #[test]
    fn test_last_match_wins() {
        // Failure then success: success is reported
        let mut accepted = Accepted::default();
        let group = Avp::grouped(
            VENDOR_SPECIFIC_APPLICATION_ID,
            vec![
                Avp::unsigned32(VENDOR_ID, 10415),
                Avp::auth_application_id(3),
                Avp::acct_application_id(3),
            ],
        );
        handle_group(&dict(), &group, &mut accepted).unwrap();
        assert_eq!(accepted.finish().ids(), &[3]);

        // Success then failure: failure is reported, earlier id stays accepted
        let mut accepted = Accepted::default();
        let bad = Avp::new(ACCT_APPLICATION_ID, AvpData::Other("x".to_string()));
        let group = Avp::grouped(
            VENDOR_SPECIFIC_APPLICATION_ID,
            vec![Avp::auth_application_id(16777251), bad.clone()],
        );
        let err = handle_group(&dict(), &group, &mut accepted).unwrap_err();
        assert_eq!(err, NegotiationError::UnexpectedAvp(bad));
        assert_eq!(accepted.finish().ids(), &[16777251]);
    }

    #[test]
    fn test_group_without_application_passes() {
        let mut accepted = Accepted::default();
        let group = Avp::grouped(
            VENDOR_SPECIFIC_APPLICATION_ID,
            vec![Avp::unsigned32(VENDOR_ID, 10415)],
        );
        handle_group(&dict(), &group, &mut accepted).unwrap();
        assert!(accepted.is_empty());
    }
}
