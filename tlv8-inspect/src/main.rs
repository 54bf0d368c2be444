#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod app;
mod renderers;

use std::{io, process};

use tracing_subscriber::EnvFilter;

use app::{
    options::{from_command_line, Options},
    runtime::Config,
};

/// Send diagnostics to stderr so stdout only carries output
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    // Get args from command line
    let args = from_command_line();
    // Create application options
    let options = match Options::from_args(&args) {
        Ok(options) => options,
        Err(why) => {
            eprintln!("{why}");
            process::exit(1);
        }
    };

    init_logging(options.verbosity);

    // Run the app
    let app = Config::new(options);
    if let Err(why) = app.start() {
        eprintln!("{why}");
        process::exit(1);
    }
}
