//! Password generation.

use log::trace;

use super::{Alphabet, Error, Options, Password, Result, charset};
use crate::entropy::IndexSource;

/// Draw `length` characters from `alphabet`, independently and with replacement.
pub fn sample<R: IndexSource + ?Sized>(
    alphabet: &Alphabet,
    length: usize,
    rng: &mut R,
) -> Result<Password> {
    if alphabet.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let chars = alphabet.as_slice();
    let mut value = String::with_capacity(length);
    for _ in 0..length {
        let i = rng.index(chars.len());
        debug_assert!(i < chars.len(), "index source returned {i} for {} chars", chars.len());
        value.push(chars[i]);
    }

    trace!("sampled {} chars from a {} char alphabet", length, alphabet.len());
    Ok(Password::new(value))
}

/// Validate `options`, build the alphabet and sample one password.
pub fn generate<R: IndexSource + ?Sized>(options: &Options, rng: &mut R) -> Result<Password> {
    options.validate()?;
    let alphabet = charset::build(options);
    sample(&alphabet, options.length, rng)
}
