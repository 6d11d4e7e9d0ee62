//! Minimal CLI: `<version> <channel>` → fetch → render → write
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use crate::codegen::generate_module;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::{document_url, Channel, DocumentSource, HttpSource, Target};
use crate::output::{output_file_name, write_module};
use crate::schema::SchemaDocument;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

pub const USAGE: &str = "Command Usage\ntyped-block-permutation <version> <channel: stable | preview>";

/// generate a typed BlockPermutation wrapper from the bds-docs block schema
#[derive(Parser, Debug)]
#[command(name = "typed-block-permutation", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// engine version, substituted verbatim into the document URL (e.g. 1.20.0)
    version: Option<String>,

    /// release channel: stable | preview
    channel: Option<String>,

    /// print usage and exit
    #[arg(short, long)]
    help: bool,
}

/// What the argument list asks for. No side effects have happened yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    InvalidChannel(String),
    /// clap refused the arguments (unknown flag, surplus positional, ...)
    Rejected(String),
    Parsed(Target),
}

#[derive(Debug)]
pub struct CommandLineInterface {
    invocation: Invocation,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

pub fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(x) => x,
        Err(error) => {
            let rendered = error.to_string();
            let line = rendered.lines().next().unwrap_or_default();
            return Invocation::Rejected(line.trim_start_matches("error: ").to_string());
        }
    };
    let version = match args.version {
        Some(v) if !v.is_empty() && !args.help => v,
        _ => return Invocation::Help,
    };
    let raw_channel = args.channel.unwrap_or_default();
    match raw_channel.parse::<Channel>() {
        Ok(channel) => Invocation::Parsed(Target { version, channel }),
        Err(raw) => Invocation::InvalidChannel(raw),
    }
}

/// Fetching → Decoding → Rendering → Writing. The output file is only touched
/// once the whole text exists.
pub fn generate(target: &Target, config: &Config, source: &impl DocumentSource) -> Result<PathBuf> {
    let url = document_url(&config.base_url, target);
    tracing::debug!(%url, "fetching block document");
    let bytes = source.fetch(&url)?;

    let doc = SchemaDocument::from_json_slice(&bytes)?;
    tracing::debug!(
        properties = doc.properties.len(),
        blocks = doc.blocks.len(),
        "decoded block schema"
    );
    for warning in doc.lint() {
        tracing::warn!("{warning}");
    }

    let text = generate_module(&doc);
    let path = write_module(&config.output_dir, target, &text)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote typed block permutation module");
    Ok(path)
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self { invocation: parse_args(std::env::args_os()) }
    }
    pub fn run(&self) -> ExitCode {
        match &self.invocation {
            Invocation::Help => {
                println!("{USAGE}");
                ExitCode::SUCCESS
            }
            Invocation::InvalidChannel(raw) => {
                report(&format!("Channel will only accept \"stable\" or \"preview\". (got \"{raw}\")"));
                ExitCode::FAILURE
            }
            Invocation::Rejected(message) => {
                report(message);
                ExitCode::FAILURE
            }
            Invocation::Parsed(target) => match generate_from_env(target) {
                Ok(_) => ExitCode::SUCCESS,
                Err(error) => {
                    report(&format!("{error:#}"));
                    ExitCode::FAILURE
                }
            },
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn generate_from_env(target: &Target) -> anyhow::Result<PathBuf> {
    let config = Config::from_env()?;
    let source = HttpSource::new(&config)?;
    let path = generate(target, &config, &source)
        .with_context(|| format!("could not generate {}", output_file_name(target)))?;
    Ok(path)
}

fn report(message: &str) {
    eprintln!("{} {message}", "error:".red().bold());
}
