use clap::Parser;

use passforge::cli::{self, Args};
use passforge::exits;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    exits::install_handlers();
    exits::disable_core_dumps();

    let args = Args::parse();
    std::process::exit(cli::run(args));
}
