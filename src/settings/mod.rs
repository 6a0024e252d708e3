//! Persisted generation defaults.
//!
//! Only option flags and the entropy source are stored. Generated passwords
//! never touch disk.

mod file;

use std::path::PathBuf;

use thiserror::Error;

use crate::entropy::Source;
use crate::pass::Options;

pub use file::default_path;

/// Overrides the settings file location.
pub const CONFIG_ENV: &str = "PASSFORGE_CONFIG";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub options: Options,
    pub source: Source,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        file::load(&default_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        file::save(self, &default_path())
    }
}
