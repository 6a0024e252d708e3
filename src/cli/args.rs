use clap::Parser;

use crate::entropy::Source;
use crate::pass::Preset;

/// passforge - Generate passwords and rate their strength.
///
/// Passwords are drawn from the selected character classes; each one is scored
/// against a seven-check heuristic. The last five are kept for the session.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
pub struct Args {
    /// Password length (4-32)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Start from a preset; explicit flags still apply on top
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub number: u32,

    /// Print strength score and label after each password
    #[arg(long)]
    pub strength: bool,

    /// Print the history of the last five passwords when done
    #[arg(long)]
    pub history: bool,

    /// Score the given text instead of generating
    #[arg(long, value_name = "TEXT")]
    pub score: Option<String>,

    /// Copy the last password to the clipboard instead of printing it
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Randomness source
    #[arg(long, value_enum)]
    pub source: Option<Source>,

    /// Seed for reproducible output (not for real passwords)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Interactive terminal session
    #[arg(short, long)]
    pub interactive: bool,

    /// Start from the saved settings
    #[arg(short, long)]
    pub saved: bool,

    /// Save the effective settings as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "passforge", "-l", "20", "--no-symbols", "-p", "strong", "-n", "3", "--seed", "7",
        ]);
        assert_eq!(args.length, Some(20));
        assert!(args.no_symbols);
        assert_eq!(args.preset, Some(Preset::Strong));
        assert_eq!(args.number, 3);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn about_comes_from_doc_comment() {
        let cmd = Args::command();
        let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();
        assert!(about.starts_with("passforge - Generate passwords and rate their strength"));
    }
}
