//! Caller-owned generation state.
//!
//! A `Session` bundles the current options, the outcome of the last
//! generation and the history. Every operation consumes the session and
//! returns the next one.

use log::debug;

use super::{Error, History, Options, Password, Preset, Strength, generate, strength};
use crate::entropy::IndexSource;

/// A password together with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub password: Password,
    pub strength: Strength,
}

#[derive(Debug, Clone)]
pub struct Session {
    options: Options,
    current: Option<Result<Generated, Error>>,
    history: History,
}

impl Session {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            current: None,
            history: History::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Last outcome, `None` before the first generation.
    pub fn current(&self) -> Option<&Result<Generated, Error>> {
        self.current.as_ref()
    }

    /// Last successfully generated password, if the last attempt succeeded.
    pub fn password(&self) -> Option<&Password> {
        match &self.current {
            Some(Ok(generated)) => Some(&generated.password),
            _ => None,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Generate with the current options. On success the password is scored and
    /// recorded; on failure the error replaces the current outcome and the
    /// history is left alone.
    pub fn regenerate<R: IndexSource + ?Sized>(self, rng: &mut R) -> Self {
        let Self {
            options, history, ..
        } = self;

        match generate(&options, rng) {
            Ok(password) => {
                let strength = strength::score(password.as_str());
                debug!("generated {} char password ({})", password.len(), strength.label);
                Self {
                    options,
                    history: history.record(password.clone()),
                    current: Some(Ok(Generated { password, strength })),
                }
            }
            Err(e) => {
                debug!("generation failed: {}", e);
                Self {
                    options,
                    history,
                    current: Some(Err(e)),
                }
            }
        }
    }

    /// Swap in new options and regenerate.
    pub fn with_options<R: IndexSource + ?Sized>(self, options: Options, rng: &mut R) -> Self {
        Self { options, ..self }.regenerate(rng)
    }

    pub fn with_preset<R: IndexSource + ?Sized>(self, preset: Preset, rng: &mut R) -> Self {
        self.with_options(preset.options(), rng)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::seeded;
    use crate::pass::{HISTORY_CAPACITY, Label, charset};

    #[test]
    fn regenerate_scores_and_records() {
        let mut rng = seeded(10);
        let session = Session::default().regenerate(&mut rng);
        let Some(Ok(generated)) = session.current() else {
            panic!("expected a password");
        };
        assert_eq!(generated.password.len(), 12);
        assert_eq!(generated.strength, strength::score(generated.password.as_str()));
        assert_eq!(session.history().latest(), Some(&generated.password));
    }

    #[test]
    fn history_holds_last_five_after_six_generations() {
        let mut rng = seeded(11);
        let mut session = Session::default();
        let mut produced = Vec::new();
        for _ in 0..6 {
            session = session.regenerate(&mut rng);
            produced.push(session.password().cloned().unwrap());
        }
        let expected: Vec<&Password> = produced.iter().rev().take(HISTORY_CAPACITY).collect();
        let actual: Vec<&Password> = session.history().iter().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn empty_alphabet_does_not_touch_history() {
        let mut rng = seeded(12);
        let session = Session::default().regenerate(&mut rng);
        let none = Options {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Options::default()
        };
        let session = session.with_options(none, &mut rng);
        assert!(matches!(session.current(), Some(Err(Error::EmptyAlphabet))));
        assert!(session.password().is_none());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn preset_replaces_options() {
        let mut rng = seeded(13);
        let custom = Options {
            length: 30,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: true,
        };
        let session = Session::new(custom)
            .regenerate(&mut rng)
            .with_preset(Preset::Weak, &mut rng);
        assert_eq!(*session.options(), Preset::Weak.options());

        let alphabet = charset::build(session.options());
        let password = session.password().unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.as_str().chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn strong_preset_scores_at_least_fair() {
        let mut rng = seeded(14);
        let session = Session::default().with_preset(Preset::Strong, &mut rng);
        let Some(Ok(generated)) = session.current() else {
            panic!("expected a password");
        };
        // length checks alone pass 3 of 7
        assert!(generated.strength.label >= Label::Fair);
    }

    #[test]
    fn invalid_length_is_reported() {
        let mut rng = seeded(15);
        let session = Session::new(Options {
            length: 64,
            ..Options::default()
        })
        .regenerate(&mut rng);
        assert!(matches!(
            session.current(),
            Some(Err(Error::InvalidLength { length: 64 }))
        ));
    }
}
