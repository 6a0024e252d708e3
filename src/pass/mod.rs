//! Password engine: charset building, sampling, scoring and history.

pub mod charset;
mod error;
mod generate;
mod history;
mod options;
mod password;
mod preset;
mod session;
pub mod strength;

pub use charset::Alphabet;
pub use error::{Error, Result};
pub use generate::{generate, sample};
pub use history::{HISTORY_CAPACITY, History};
pub use options::{MAX_LENGTH, MIN_LENGTH, Options};
pub use password::Password;
pub use preset::{Preset, preset_options};
pub use session::{Generated, Session};
pub use strength::{Label, Strength, score};
