//! Base applications compiled into the binary.
//!
//! Ids are from the IANA "Application IDs" registry. The set is what a
//! plain RFC 6733 node plus the common 3GPP interfaces would recognise;
//! anything else comes from dictionary files.

use crate::dict::{AppType, Application};

/// Embedded application tuple: (id, name, declared type)
pub type EmbeddedApplication = (u32, &'static str, Option<AppType>);

/// All embedded application definitions
pub static BASE_APPLICATIONS: &[EmbeddedApplication] = &[
    // IETF
    (0, "Diameter Common Messages", None),
    (1, "NASREQ", Some(AppType::Auth)),
    (2, "Mobile IPv4", Some(AppType::Auth)),
    (3, "Diameter Base Accounting", Some(AppType::Acct)),
    (4, "Diameter Credit Control", Some(AppType::Auth)),
    (5, "Diameter EAP", Some(AppType::Auth)),
    (6, "Diameter SIP", Some(AppType::Auth)),
    // 3GPP
    (16777216, "3GPP Cx", Some(AppType::Auth)),
    (16777217, "3GPP Sh", Some(AppType::Auth)),
    (16777236, "3GPP Rx", Some(AppType::Auth)),
    (16777238, "3GPP Gx", Some(AppType::Auth)),
    (16777251, "3GPP S6a/S6d", Some(AppType::Auth)),
    (16777252, "3GPP S13/S13'", Some(AppType::Auth)),
    (16777255, "3GPP SLg", Some(AppType::Auth)),
    (16777291, "3GPP SLh", Some(AppType::Auth)),
];

/// Embedded applications as cards
pub fn get_base_applications() -> Vec<Application> {
    BASE_APPLICATIONS
        .iter()
        .map(|&(id, name, app_type)| Application {
            id,
            name: name.to_string(),
            app_type,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<u32> = BASE_APPLICATIONS.iter().map(|(id, _, _)| *id).collect();
        assert_eq!(ids.len(), BASE_APPLICATIONS.len());
    }

    #[test]
    fn test_base_applications() {
        let apps = get_base_applications();
        assert_eq!(apps.len(), BASE_APPLICATIONS.len());

        let acct = apps.iter().find(|app| app.id == 3).unwrap();
        assert_eq!(acct.app_type, Some(AppType::Acct));

        let common = apps.iter().find(|app| app.id == 0).unwrap();
        assert_eq!(common.app_type, None);
    }
}
