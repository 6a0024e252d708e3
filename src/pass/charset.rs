//! Character set building for password generation.

use super::Options;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// The pool of characters a password is sampled from.
///
/// Classes are always laid out in the same order (uppercase, lowercase,
/// digits, symbols) so identical options give identical alphabets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No class was enabled. Never a valid sampling source.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

/// Class strings enabled by `options`, in alphabet order.
fn enabled(options: &Options) -> impl Iterator<Item = &'static str> {
    [
        (options.include_uppercase, UPPERCASE),
        (options.include_lowercase, LOWERCASE),
        (options.include_numbers, DIGITS),
        (options.include_symbols, SYMBOLS),
    ]
    .into_iter()
    .filter_map(|(on, class)| on.then_some(class))
}

/// Build the character pool for the enabled classes.
pub fn build(options: &Options) -> Alphabet {
    Alphabet(enabled(options).flat_map(str::chars).collect())
}

/// Size of the pool `build` would return (for entropy display).
pub fn size(options: &Options) -> usize {
    enabled(options).map(str::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(upper: bool, lower: bool, numbers: bool, symbols: bool) -> Options {
        Options {
            length: 12,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn all_classes_in_fixed_order() {
        let alphabet = build(&Options::default());
        let expected: String = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();
        assert_eq!(alphabet.as_slice().iter().collect::<String>(), expected);
        assert_eq!(alphabet.len(), size(&Options::default()));
    }

    #[test]
    fn disabled_classes_are_skipped() {
        let alphabet = build(&only(false, true, true, false));
        assert_eq!(alphabet.len(), 36);
        assert!(alphabet.contains('a'));
        assert!(alphabet.contains('9'));
        assert!(!alphabet.contains('A'));
        assert!(!alphabet.contains('!'));
        assert_eq!(alphabet.as_slice().first(), Some(&'a'));
    }

    #[test]
    fn no_classes_is_empty() {
        let options = only(false, false, false, false);
        let alphabet = build(&options);
        assert!(alphabet.is_empty());
        assert_eq!(size(&options), 0);
        assert!(!options.any_class());
    }

    #[test]
    fn build_is_deterministic() {
        let options = only(true, false, true, true);
        assert_eq!(build(&options), build(&options));
    }

    #[test]
    fn symbol_set_has_no_alphanumerics() {
        assert!(SYMBOLS.chars().all(|c| !c.is_ascii_alphanumeric()));
    }
}
