//! CLI context - bundles parsed arguments and effective settings.

use std::io::{self, Write};

use log::{debug, info};
use thiserror::Error;

use super::{Args, prompts, quiet};
use crate::clipboard;
use crate::entropy::{self, IndexSource, Source};
use crate::pass::{self, Options, Password, Session};
use crate::settings::{self, Settings, SettingsError};
use crate::tui;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] pass::Error),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("i/o: {0}")]
    Io(#[from] io::Error),

    #[error("interactive mode needs a terminal")]
    NotATerminal,
}

pub struct Context {
    pub settings: Settings,
    args: Args,
}

impl Context {
    pub fn new(args: Args) -> Self {
        let settings = if args.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Self { settings, args }
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        quiet::set(self.args.quiet);

        if let Some(text) = self.args.score.as_deref() {
            let strength = pass::score(text);
            println!("{}", prompts::format_strength(&strength, quiet::stdout_is_tty()));
            return Ok(());
        }

        self.apply_flags();
        if self.args.save {
            // only options `-s` can use again are saved
            self.settings.options.validate()?;
            self.settings.save_to_file()?;
            prompts::settings_saved(&settings::default_path().display().to_string());
        }

        let source = self.settings.source;
        if self.args.seed.is_some() {
            prompts::seeded_output();
        } else if source == Source::Cycle {
            prompts::weak_source();
        }
        let mut rng = entropy::provider(source, self.args.seed);

        if self.args.interactive {
            if !quiet::stdin_is_tty() || !quiet::stdout_is_tty() {
                return Err(CliError::NotATerminal);
            }
            info!("starting interactive session");
            tui::run(self.settings.options, source, &mut rng)?;
            return Ok(());
        }

        self.generate_output(&mut rng)
    }

    /// Fold preset and explicit flags into the settings. Presets first, then
    /// individual flags override them.
    fn apply_flags(&mut self) {
        let args = &self.args;
        let mut options: Options = match args.preset {
            Some(preset) => preset.options(),
            None => self.settings.options,
        };

        if let Some(length) = args.length {
            options.length = length;
        }
        if args.no_upper {
            options.include_uppercase = false;
        }
        if args.no_lower {
            options.include_lowercase = false;
        }
        if args.no_numbers {
            options.include_numbers = false;
        }
        if args.no_symbols {
            options.include_symbols = false;
        }
        if let Some(source) = args.source {
            self.settings.source = source;
        }

        debug!("effective options: {:?}", options);
        self.settings.options = options;
    }

    fn generate_output<R: IndexSource + ?Sized>(&self, rng: &mut R) -> Result<(), CliError> {
        let color = quiet::stdout_is_tty();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut session = Session::new(self.settings.options);

        for _ in 0..self.args.number {
            session = session.regenerate(rng);
            let generated = match session.current() {
                Some(Ok(generated)) => generated,
                Some(Err(e)) => return Err(e.clone().into()),
                None => continue,
            };
            if self.args.clipboard {
                continue;
            }
            if self.args.strength {
                writeln!(
                    out,
                    "{}  {}",
                    generated.password,
                    prompts::format_strength(&generated.strength, color)
                )?;
            } else {
                writeln!(out, "{}", generated.password)?;
            }
        }

        if self.args.clipboard
            && let Some(password) = session.password()
        {
            self.copy_or_print(password, &mut out)?;
        }

        if self.args.history {
            writeln!(out, "History (newest first):")?;
            for (i, password) in session.history().iter().enumerate() {
                writeln!(out, "{:>2}. {}", i + 1, password)?;
            }
        }

        Ok(())
    }

    fn copy_or_print(&self, password: &Password, out: &mut impl Write) -> Result<(), CliError> {
        match clipboard::copy(password.as_str()) {
            Ok(()) => {
                prompts::clipboard_copied();
                if self.args.strength {
                    let strength = pass::score(password.as_str());
                    writeln!(out, "{}", prompts::format_strength(&strength, quiet::stdout_is_tty()))?;
                }
            }
            Err(e) => {
                prompts::clipboard_error(&e);
                writeln!(out, "{}", password)?;
            }
        }
        Ok(())
    }
}
