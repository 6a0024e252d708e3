mod args;
mod context;
pub mod prompts;
pub mod quiet;

pub use args::Args;
pub use context::{CliError, Context};

/// Run the CLI with parsed arguments. Returns the process exit code.
pub fn run(args: Args) -> i32 {
    let mut ctx = Context::new(args);
    match ctx.run() {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("cli failed: {:?}", e);
            prompts::error(&format!("error: {e}"));
            1
        }
    }
}
