//! Generation options.

use super::{Error, Result};

/// Shortest password the engine will produce.
pub const MIN_LENGTH: usize = 4;
/// Longest password the engine will produce.
pub const MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Options {
    /// True when at least one character class is enabled.
    pub fn any_class(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }

    pub fn length_in_range(&self) -> bool {
        (MIN_LENGTH..=MAX_LENGTH).contains(&self.length)
    }

    /// Check that these options can produce a password. Length is checked
    /// before the classes.
    pub fn validate(&self) -> Result<()> {
        if !self.length_in_range() {
            return Err(Error::InvalidLength {
                length: self.length,
            });
        }
        if !self.any_class() {
            return Err(Error::EmptyAlphabet);
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Options::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_length_then_classes() {
        let long = Options {
            length: MAX_LENGTH + 8,
            ..Options::default()
        };
        assert_eq!(long.validate(), Err(Error::InvalidLength { length: 40 }));

        let none = Options {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Options::default()
        };
        assert_eq!(none.validate(), Err(Error::EmptyAlphabet));
        assert_eq!(
            Options { length: 2, ..none }.validate(),
            Err(Error::InvalidLength { length: 2 })
        );
    }
}
