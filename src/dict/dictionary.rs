//! Application dictionary used during capabilities exchange.
//!
//! The dictionary holds two sources of applications:
//! 1. Base applications: compiled into the binary (see [`super::BASE_APPLICATIONS`])
//! 2. File applications: loaded from TOML dictionary files
//!
//! It is built once and then only read, so one instance can be shared by
//! every concurrent negotiation (e.g. behind an `Arc`).

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::config::DictionaryConfig;
use crate::dict::embedded::get_base_applications;
use crate::dict::Application;
use crate::error::{DiamError, Result};

/// Read-only application lookup consulted by negotiation
pub trait ApplicationLookup: Send + Sync {
    /// Application registered under `id`, if any
    fn application(&self, id: u32) -> Option<&Application>;
}

/// On-disk dictionary layout
#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default, rename = "application")]
    applications: Vec<Application>,
}

/// Application dictionary
///
/// # Example
/// ```
/// use diam::dict::{AppType, Application, ApplicationLookup, Dictionary};
///
/// let dict = Dictionary::new()
///     .with_application(Application::new(16777312, "3GPP S6c", AppType::Auth));
///
/// assert_eq!(dict.application(3).unwrap().app_type, Some(AppType::Acct));
/// assert!(dict.contains(16777312));
/// assert!(dict.application(77).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_id: HashMap<u32, Application>,
}

impl Dictionary {
    /// Create a dictionary with the base applications loaded
    pub fn new() -> Self {
        let mut dict = Self::empty();
        for app in get_base_applications() {
            dict.insert(app);
        }
        dict
    }

    /// Create a dictionary with no applications
    pub fn empty() -> Self {
        Self {
            by_id: HashMap::new(),
        }
    }

    /// Build a dictionary as described by configuration
    pub fn from_config(config: &DictionaryConfig) -> Result<Self> {
        let mut dict = if config.include_base {
            Self::new()
        } else {
            Self::empty()
        };

        if let Some(path) = &config.path {
            let loaded = dict.load_file(path)?;
            tracing::debug!("Loaded {} applications from {}", loaded, path.display());
        }

        Ok(dict)
    }

    /// Parse a TOML dictionary document into an otherwise empty dictionary
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut dict = Self::empty();
        dict.load_toml_str(content)?;
        Ok(dict)
    }

    /// Load applications from a TOML file, returning how many were read
    ///
    /// File entries replace base applications with the same id; an id
    /// repeated inside one file is an error.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DiamError::Dictionary(format!("Failed to read {}: {e}", path.display()))
        })?;
        self.load_toml_str(&content)
    }

    fn load_toml_str(&mut self, content: &str) -> Result<usize> {
        let file: DictionaryFile = toml::from_str(content)
            .map_err(|e| DiamError::Dictionary(format!("Failed to parse dictionary: {e}")))?;

        let mut seen = HashSet::with_capacity(file.applications.len());
        for app in &file.applications {
            if !seen.insert(app.id) {
                return Err(DiamError::Dictionary(format!(
                    "Duplicate application id {}",
                    app.id
                )));
            }
        }

        let count = file.applications.len();
        for app in file.applications {
            if let Some(previous) = self.insert(app) {
                tracing::debug!("Application {} ({}) overridden", previous.id, previous.name);
            }
        }
        Ok(count)
    }

    /// Add an application, returning the one it replaced
    pub fn insert(&mut self, app: Application) -> Option<Application> {
        self.by_id.insert(app.id, app)
    }

    /// Builder form of [`Dictionary::insert`]
    pub fn with_application(mut self, app: Application) -> Self {
        self.insert(app);
        self
    }

    /// Get an application by id
    pub fn get(&self, id: u32) -> Option<&Application> {
        self.by_id.get(&id)
    }

    /// Check if an application id is known
    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Number of applications
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the dictionary has no applications
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// All applications, sorted by id
    pub fn applications(&self) -> Vec<&Application> {
        let mut apps: Vec<&Application> = self.by_id.values().collect();
        apps.sort_by_key(|app| app.id);
        apps
    }
}

impl ApplicationLookup for Dictionary {
    fn application(&self, id: u32) -> Option<&Application> {
        self.get(id)
    }
}
