//! Application cards held by the dictionary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::avp::{ACCT_APPLICATION_ID, AUTH_APPLICATION_ID};

/// Declared application type
///
/// Also used as the kind an application id is presented under: an
/// Acct-Application-Id AVP presents an accounting application, an
/// Auth-Application-Id AVP an authentication one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    /// Accounting application
    Acct,
    /// Authentication/authorization application
    Auth,
}

impl AppType {
    /// AVP code that carries ids of this type
    pub fn avp_code(self) -> u32 {
        match self {
            AppType::Acct => ACCT_APPLICATION_ID,
            AppType::Auth => AUTH_APPLICATION_ID,
        }
    }

    /// Type presented by an AVP code, if it is an application id code
    pub fn from_avp_code(code: u32) -> Option<Self> {
        match code {
            ACCT_APPLICATION_ID => Some(AppType::Acct),
            AUTH_APPLICATION_ID => Some(AppType::Auth),
            _ => None,
        }
    }

    /// Dictionary spelling
    pub fn as_str(self) -> &'static str {
        match self {
            AppType::Acct => "acct",
            AppType::Auth => "auth",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "acct" => Ok(AppType::Acct),
            "auth" => Ok(AppType::Auth),
            other => Err(format!("invalid application type '{other}', expected acct|auth")),
        }
    }
}

/// A locally known application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Application id
    pub id: u32,
    /// Human readable name
    #[serde(default)]
    pub name: String,
    /// Declared type; untyped applications match either presentation
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub app_type: Option<AppType>,
}

impl Application {
    /// Create a typed application
    pub fn new(id: u32, name: &str, app_type: AppType) -> Self {
        Self {
            id,
            name: name.to_string(),
            app_type: Some(app_type),
        }
    }

    /// Create an application without a declared type
    pub fn untyped(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            app_type: None,
        }
    }

    /// Whether an id presented as `presented` conflicts with the declared type
    pub fn conflicts_with(&self, presented: AppType) -> bool {
        matches!(self.app_type, Some(declared) if declared != presented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_type_codes() {
        assert_eq!(AppType::Acct.avp_code(), 259);
        assert_eq!(AppType::Auth.avp_code(), 258);
        assert_eq!(AppType::from_avp_code(259), Some(AppType::Acct));
        assert_eq!(AppType::from_avp_code(258), Some(AppType::Auth));
        assert_eq!(AppType::from_avp_code(260), None);
    }

    #[test]
    fn test_app_type_parse() {
        assert_eq!("ACCT".parse::<AppType>().unwrap(), AppType::Acct);
        assert_eq!("auth".parse::<AppType>().unwrap(), AppType::Auth);
        assert!("both".parse::<AppType>().is_err());
    }

    #[test]
    fn test_conflicts() {
        let s6a = Application::new(16777251, "3GPP S6a/S6d", AppType::Auth);
        assert!(s6a.conflicts_with(AppType::Acct));
        assert!(!s6a.conflicts_with(AppType::Auth));

        let common = Application::untyped(0, "Diameter Common Messages");
        assert!(!common.conflicts_with(AppType::Acct));
        assert!(!common.conflicts_with(AppType::Auth));
    }
}
