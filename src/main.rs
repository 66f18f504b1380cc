/*!
Main binary for jsonvet.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::generate;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colored::Colorize;
use std::io::stdout;
use std::io::{self};
use std::{
    fs::{self},
    io::{IsTerminal, Read},
    path::{Path, PathBuf},
    process,
};

use jsonvet::count::{self, Selection};

/// Validate that an input document is syntactically well-formed JSON.
#[derive(Parser)]
#[command(name = "jv", version, about, long_about = None, disable_help_subcommand = true)]
struct Args {
    /// Optional subcommands
    #[command(subcommand)]
    command: Option<Commands>,
    /// Optional path to JSON file. If omitted, reads from STDIN
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

/// Available subcommands for `jv`
#[derive(Subcommand)]
enum Commands {
    /// Count lines, words, bytes, and characters in the input
    Count {
        /// Optional path to input file. If omitted, reads from STDIN
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
        /// Print the line count
        #[arg(short, long, action = ArgAction::SetTrue)]
        lines: bool,
        /// Print the word count; a word is a maximal alphanumeric run
        #[arg(short, long, action = ArgAction::SetTrue)]
        words: bool,
        /// Print the byte count
        #[arg(short = 'c', long, action = ArgAction::SetTrue)]
        bytes: bool,
        /// Print the character count
        #[arg(short = 'm', long, action = ArgAction::SetTrue)]
        chars: bool,
        /// Print the count of alphanumeric characters only
        #[arg(short = 'u', long, action = ArgAction::SetTrue)]
        alnum: bool,
    },
    /// Generate shell completions for the given shell to stdout
    Generate { shell: clap_complete::Shell },
}

/// Entry point for main binary.
///
/// By default this validates the given file (or STDIN when piped in) and
/// prints the verdict: `Valid JSON` on STDOUT with exit status 0, or
/// `Invalid JSON: <message>` on STDERR with exit status 1. Unreadable
/// input exits with status 1 and its own message.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    match args.command {
        Some(Commands::Generate { shell }) => {
            let mut cmd = Args::command();
            generate(shell, &mut cmd, "jv", &mut stdout().lock());
        }
        Some(Commands::Count {
            input,
            lines,
            words,
            bytes,
            chars,
            alnum,
        }) => {
            let raw = read_input_bytes(input.as_deref())?;
            let counts = count::scan(&raw);
            let selection = Selection {
                lines,
                words,
                bytes,
                chars,
                alnum,
            }
            .or_default();

            let name = input.as_ref().map(|path| path.to_string_lossy());
            println!(
                "{}",
                count::format_row(&counts, selection, name.as_deref())
            );
        }
        None => {
            let content = match args.input.as_deref() {
                Some(path) => {
                    fs::read_to_string(path).with_context(|| {
                        format!("Failed to read file {}", path.display())
                    })?
                }
                None => {
                    if io::stdin().is_terminal() {
                        // No piped input and no file specified
                        let mut cmd = Args::command();
                        return Ok(cmd.print_help()?);
                    }
                    let mut buffer = String::new();
                    io::stdin()
                        .read_to_string(&mut buffer)
                        .context("Failed to read STDIN")?;
                    buffer
                }
            };

            log::debug!("validating {} bytes of input", content.len());

            match jsonvet::validate_str(&content) {
                Ok(()) => println!("{}", "Valid JSON".green()),
                Err(err) => {
                    eprintln!("{} {err}", "Invalid JSON:".red());
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Read the entire input from the given file, or STDIN when no path is
/// given.
fn read_input_bytes(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| {
            format!("Failed to read file {}", path.display())
        }),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read STDIN")?;
            Ok(buffer)
        }
    }
}
