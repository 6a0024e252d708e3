//! Randomness providers for the sampler.
//!
//! The sampler only needs uniform indices; anything implementing
//! [`IndexSource`] can drive it. Every `rand::RngCore` already does, so the
//! OS generator, a seeded generator and [`CycleRng`] are interchangeable.

mod cycle;
mod hw;

use std::fmt;
use std::str::FromStr;

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

pub use cycle::CycleRng;

/// Uniform index provider.
pub trait IndexSource {
    /// Returns an index uniformly distributed over `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: RngCore> IndexSource for R {
    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Selectable randomness source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Source {
    /// Operating system CSPRNG.
    #[default]
    Os,
    /// CPU cycle counter mixer (fast, not cryptographic).
    Cycle,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Os => "os",
            Source::Cycle => "cycle",
        }
    }

    /// Human readable description for status lines.
    pub fn describe(&self) -> String {
        match self {
            Source::Os => "OS CSPRNG".to_string(),
            Source::Cycle => format!("{} mixer (non-cryptographic)", hw::source_name()),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "os" => Ok(Source::Os),
            "cycle" => Ok(Source::Cycle),
            other => Err(format!("unknown entropy source '{other}'")),
        }
    }
}

/// Default provider: the operating system CSPRNG.
pub fn secure() -> OsRng {
    OsRng
}

/// Reproducible provider. Same seed, same passwords.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Provider for a source, or a seeded generator when `seed` is set.
pub fn provider(source: Source, seed: Option<u64>) -> Box<dyn RngCore> {
    match (seed, source) {
        (Some(seed), _) => {
            log::debug!("using seeded generator");
            Box::new(seeded(seed))
        }
        (None, Source::Os) => Box::new(secure()),
        (None, Source::Cycle) => {
            log::debug!("using cycle counter mixer");
            Box::new(CycleRng::new())
        }
    }
}
