//! Named option bundles.

use std::fmt;
use std::str::FromStr;

use super::{Error, Options, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// 8 characters, no symbols
    Weak,
    /// 12 characters, every class
    Medium,
    /// 16 characters, every class
    Strong,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Weak, Preset::Medium, Preset::Strong];

    /// The full option set for this preset. Replaces, never merges with, the
    /// caller's current options.
    pub fn options(self) -> Options {
        let base = Options::default();
        match self {
            Preset::Weak => Options {
                length: 8,
                include_symbols: false,
                ..base
            },
            Preset::Medium => Options { length: 12, ..base },
            Preset::Strong => Options { length: 16, ..base },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Weak => "weak",
            Preset::Medium => "medium",
            Preset::Strong => "strong",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

/// Options for a preset by name.
pub fn preset_options(name: &str) -> Result<Options> {
    name.parse::<Preset>().map(Preset::options)
}
