//! Rolling history of generated passwords.

use log::trace;

use super::Password;

/// Entries kept before the oldest is dropped.
pub const HISTORY_CAPACITY: usize = 5;

/// Most-recent-first list of at most `HISTORY_CAPACITY` passwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History(Vec<Password>);

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `password`, dropping whatever falls past the capacity.
    /// Identical passwords are kept as separate entries.
    pub fn record(mut self, password: Password) -> Self {
        self.0.insert(0, password);
        if self.0.len() > HISTORY_CAPACITY {
            trace!("history full, evicting {}", self.0.len() - HISTORY_CAPACITY);
            self.0.truncate(HISTORY_CAPACITY);
        }
        self
    }

    pub fn latest(&self) -> Option<&Password> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Password> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Password;
    type IntoIter = std::slice::Iter<'a, Password>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
