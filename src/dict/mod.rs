//! Application dictionary.
//!
//! Maps application ids to their declared type (`acct` or `auth`). The
//! negotiation core only sees it through [`ApplicationLookup`].
//!
//! # Example
//!
//! ```
//! use diam::dict::{AppType, Dictionary};
//!
//! let dict = Dictionary::new();
//! let app = dict.get(16777251).unwrap();
//! assert_eq!(app.name, "3GPP S6a/S6d");
//! assert_eq!(app.app_type, Some(AppType::Auth));
//! ```

mod application;
mod dictionary;
mod embedded;

pub use application::{AppType, Application};
pub use dictionary::{ApplicationLookup, Dictionary};
pub use embedded::{get_base_applications, BASE_APPLICATIONS};
