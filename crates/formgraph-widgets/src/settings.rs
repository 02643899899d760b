//! Form-wide settings.
//!
//! Settings name the two reserved list-control keys, the default time zone
//! for time widgets, the encoding reported when a form needs multipart
//! submission, and the most rows a list accepts from one submission. They
//! load from TOML; every key is optional.
//!
//! ```toml
//! add_control = "action--add"
//! remove_control = "action--remove"
//! time_zone = "Europe/Berlin"
//! max_rows = 200
//! ```

use std::path::Path;

use chrono_tz::Tz;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default key whose value names the list that should grow by one row.
pub const DEFAULT_ADD_CONTROL: &str = "formgraph-action--add-to-list";

/// Default key whose value names the list row that should be removed.
pub const DEFAULT_REMOVE_CONTROL: &str = "formgraph-action--remove-from-list";

/// Default encoding reported for forms containing file widgets.
pub const DEFAULT_MULTIPART_ENCTYPE: &str = "multipart/form-data";

/// Default bound on the rows a list binds from one submission.
pub const DEFAULT_MAX_ROWS: usize = 1000;

/// Environment variable overriding [`FormSettings::time_zone`].
pub const TIME_ZONE_ENV: &str = "FORMGRAPH_TIME_ZONE";

/// Settings shared by every widget of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Reserved key carrying an add-row request; its value is a list id.
    pub add_control: String,
    /// Reserved key carrying a remove-row request; its value is a row id.
    pub remove_control: String,
    /// IANA zone name used by time widgets without a zone of their own.
    pub time_zone: Option<String>,
    /// Encoding reported by the render tree when multipart is required.
    pub multipart_enctype: String,
    /// Row indices at or past this bound are not list rows.
    pub max_rows: usize,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            add_control: DEFAULT_ADD_CONTROL.to_string(),
            remove_control: DEFAULT_REMOVE_CONTROL.to_string(),
            time_zone: None,
            multipart_enctype: DEFAULT_MULTIPART_ENCTYPE.to_string(),
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl FormSettings {
    /// Parse and validate settings from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: FormSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading form settings from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
    }

    /// Apply `FORMGRAPH_TIME_ZONE` from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup, keyed by environment
    /// variable name.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(zone) = lookup(TIME_ZONE_ENV).filter(|zone| !zone.is_empty()) {
            debug!("{TIME_ZONE_ENV} overrides time zone with {zone}");
            self.time_zone = Some(zone);
        }
        self.validate()?;
        Ok(self)
    }

    /// Builder-style time zone.
    pub fn with_time_zone(mut self, zone: impl Into<String>) -> Self {
        self.time_zone = Some(zone.into());
        self
    }

    /// The configured zone, UTC when none is set.
    pub fn time_zone(&self) -> Result<Tz> {
        match &self.time_zone {
            Some(name) => parse_time_zone(name),
            None => Ok(Tz::UTC),
        }
    }

    /// Check that the control keys are usable, the row bound is positive and
    /// the zone is known.
    pub fn validate(&self) -> Result<()> {
        if self.add_control.is_empty() || self.remove_control.is_empty() {
            return Err(Error::config("list control keys must not be empty"));
        }
        if self.add_control == self.remove_control {
            return Err(Error::config(format!(
                "add and remove controls must differ, both are {:?}",
                self.add_control
            )));
        }
        if self.max_rows == 0 {
            return Err(Error::config("max_rows must be at least 1"));
        }
        self.time_zone()?;
        Ok(())
    }
}

/// Parse an IANA zone name such as `America/New_York`.
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| Error::config(format!("unknown time zone {name:?}: {e}")))
}
