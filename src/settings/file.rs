//! Settings file persistence.
//!
//! One line: `length,upper,lower,numbers,symbols,source`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::{CONFIG_ENV, Settings, SettingsError};

pub fn default_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passforge/settings")
}

pub fn to_line(settings: &Settings) -> String {
    let o = &settings.options;
    format!(
        "{},{},{},{},{},{}\n",
        o.length,
        o.include_uppercase,
        o.include_lowercase,
        o.include_numbers,
        o.include_symbols,
        settings.source
    )
}

/// Parse a settings line. Missing or malformed fields keep their defaults.
pub fn parse_line(line: &str) -> Settings {
    let mut settings = Settings::default();
    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    let field = |i: usize| parts.get(i).copied().unwrap_or("");

    let o = &mut settings.options;
    o.length = field(0).parse().unwrap_or(o.length);
    o.include_uppercase = field(1).parse().unwrap_or(o.include_uppercase);
    o.include_lowercase = field(2).parse().unwrap_or(o.include_lowercase);
    o.include_numbers = field(3).parse().unwrap_or(o.include_numbers);
    o.include_symbols = field(4).parse().unwrap_or(o.include_symbols);
    settings.source = field(5).parse().unwrap_or(settings.source);

    settings
}

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        debug!("no settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let line = data.lines().next().unwrap_or("");

    debug!("loaded settings from {}", path.display());
    Ok(parse_line(line))
}

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, to_line(settings)).map_err(io_err)?;

    debug!("saved settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::Source;
    use crate::pass::Preset;

    #[test]
    fn line_round_trips() {
        let settings = Settings {
            options: Preset::Weak.options(),
            source: Source::Cycle,
        };
        assert_eq!(to_line(&settings), "8,true,true,true,false,cycle\n");
        assert_eq!(parse_line(&to_line(&settings)), settings);
    }

    #[test]
    fn bad_fields_fall_back_individually() {
        let settings = parse_line("twenty,false,yes,true");
        assert_eq!(settings.options.length, 12);
        assert!(!settings.options.include_uppercase);
        assert!(settings.options.include_lowercase);
        assert!(settings.options.include_numbers);
        assert!(settings.options.include_symbols);
        assert_eq!(settings.source, Source::Os);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(&dir.path().join("absent")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/settings");
        let settings = Settings {
            options: Preset::Strong.options(),
            source: Source::Os,
        };
        save(&settings, &path).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }
}
