//! Interactive terminal session.

mod input;
mod view;

use std::io;

use crossterm::event::{Event, read};
use log::debug;

use crate::clipboard;
use crate::entropy::{IndexSource, Source};
use crate::pass::Options;
use crate::terminal::{RawModeGuard, clear};

pub use input::{Action, Class, action_for, adjust};
pub use view::{View, label_color};

/// Run the session until the user quits.
pub fn run<R: IndexSource + ?Sized>(options: Options, source: Source, rng: &mut R) -> io::Result<()> {
    let mut guard = RawModeGuard::new()?;
    let mut view = View::new(options, source, rng);

    loop {
        clear();
        view.draw().render();

        let action = match read()? {
            Event::Key(key) => action_for(key),
            Event::Resize(..) => continue,
            _ => Action::Ignore,
        };
        if action == Action::Quit {
            break;
        }
        debug!("session action: {:?}", action);
        view = view.apply(action, rng, clipboard::copy);
    }

    guard.restore();
    clear();
    Ok(())
}
