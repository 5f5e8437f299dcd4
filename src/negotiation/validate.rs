//! Per-AVP and per-list application id validation.

use crate::avp::{Avp, RELAY_APPLICATION_ID};
use crate::dict::{AppType, ApplicationLookup};

use super::applications::NegotiatedApplications;
use super::error::NegotiationError;

/// Ids accepted so far within one negotiation
///
/// Only ever appended to; turned into [`NegotiatedApplications`] once the
/// verdict is in.
#[derive(Debug, Default)]
pub(super) struct Accepted {
    ids: Vec<u32>,
    ignored: usize,
}

impl Accepted {
    fn accept(&mut self, id: u32) {
        self.ids.push(id);
    }

    fn ignore(&mut self, id: u32) {
        tracing::debug!("Application id {} not in dictionary, ignored", id);
        self.ignored += 1;
    }

    pub(super) fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(super) fn finish(self) -> NegotiatedApplications {
        NegotiatedApplications::new(self.ids, self.ignored)
    }
}

/// Check one application id AVP presented as `expected`.
///
/// Unknown ids are not an error: they are logged and skipped. The relay id
/// is accepted without consulting the dictionary.
pub(super) fn validate<D>(
    dict: &D,
    expected: AppType,
    avp: &Avp,
    accepted: &mut Accepted,
) -> Result<(), NegotiationError>
where
    D: ApplicationLookup + ?Sized,
{
    if avp.code != expected.avp_code() {
        return Err(NegotiationError::UnexpectedAvp(avp.clone()));
    }
    let id = avp
        .as_unsigned32()
        .ok_or_else(|| NegotiationError::UnexpectedAvp(avp.clone()))?;

    if id == RELAY_APPLICATION_ID {
        accepted.accept(id);
        return Ok(());
    }

    match dict.application(id) {
        None => accepted.ignore(id),
        Some(app) if app.conflicts_with(expected) => {
            tracing::debug!(
                "Application id {} presented as {} but declared {:?}",
                id,
                expected,
                app.app_type
            );
            return Err(NegotiationError::NoCommonApplication);
        },
        Some(_) => accepted.accept(id),
    }
    Ok(())
}

/// Check a list of same-kind application id AVPs.
///
/// One passing AVP is enough for the whole list to pass. Otherwise the
/// failure of the first AVP is returned. An empty list passes.
pub(super) fn validate_all<D>(
    dict: &D,
    expected: AppType,
    avps: &[Avp],
    accepted: &mut Accepted,
) -> Result<(), NegotiationError>
where
    D: ApplicationLookup + ?Sized,
{
    let mut common_found = false;
    let mut first_failure = None;

    for avp in avps {
        match validate(dict, expected, avp, accepted) {
            Ok(()) => common_found = true,
            Err(err) => {
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            },
        }
    }

    match first_failure {
        Some(err) if !common_found => Err(err),
        _ => Ok(()),
    }
}
