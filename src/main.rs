pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod path_de;
pub mod render;
pub mod schema;

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // logs go to stderr; stdout only ever carries the usage text
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let command_line_interface = cli::CommandLineInterface::load();
    tracing::debug!("{command_line_interface:?}");
    command_line_interface.run()
}
