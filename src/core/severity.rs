//! Severity definitions

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Importance of a log line.
///
/// The set is closed and carries no ordering: a severity only selects the
/// line marker, whether the debug gate applies, and which webhook flag is
/// consulted. Fatal calls are logged as [`Severity::Err`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warn,
    Err,
    Debug,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Info, Severity::Warn, Severity::Err, Severity::Debug];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Err => "ERR",
            Severity::Debug => "DEBUG",
        }
    }

    /// Bracketed tag placed in front of every message, e.g. `[WARN]`.
    pub fn tag(&self) -> String {
        format!("[{}]", self.to_str())
    }

    /// Tag decorated with the severity's terminal style.
    ///
    /// Styling follows `colored`'s global switches (`NO_COLOR`,
    /// `CLICOLOR_FORCE`), so the bracketed text is the stable part of the marker.
    pub fn marker(&self, use_colors: bool) -> String {
        let tag = self.tag();
        if !use_colors {
            return tag;
        }

        match self {
            Severity::Info => tag.on_blue().to_string(),
            Severity::Warn => tag.on_yellow().to_string(),
            Severity::Err => tag.on_red().to_string(),
            Severity::Debug => tag.white().on_black().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
