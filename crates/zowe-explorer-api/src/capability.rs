//! The closed set of capabilities an extension can contribute.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Capability kinds: USS files, MVS data sets, JES jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// z/OS UNIX file system access.
    Uss,
    /// Data set access.
    Mvs,
    /// Batch job access.
    Jes,
}

impl Capability {
    /// All capabilities in listing order.
    pub const ALL: [Capability; 3] = [Capability::Uss, Capability::Mvs, Capability::Jes];

    /// Upper-case display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Uss => "USS",
            Capability::Mvs => "MVS",
            Capability::Jes => "JES",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
