//! Password generation with strength scoring and a rolling history.
//!
//! The engine lives in [`pass`]: build an alphabet from character classes,
//! sample a password through an [`entropy::IndexSource`], score it, and keep
//! the last few in a [`pass::History`]. [`pass::Session`] ties those together
//! as a caller-owned value.

pub mod cli;
pub mod clipboard;
pub mod entropy;
pub mod exits;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;
