// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

mod logging;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use extended_enum::{format_dynamic_to_markdown, DefinitionSet, DynamicEnum, MarkdownOptions};
use logging::{init_logging, parse_level, LogConfig};
use serde_json::Value;
use tracing::{debug, info};

/// Extended Enum - inspect enumerations defined in JSON documents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable JSON log format
    #[arg(long, env = "EXTENDED_ENUM_LOG_JSON", default_value = "false", global = true)]
    log_json: bool,

    /// Log level when `RUST_LOG` is not set: trace, debug, info, warn or error
    #[arg(long, env = "EXTENDED_ENUM_LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render enumerations as markdown lists
    Markdown {
        /// Definitions document
        file: PathBuf,

        /// Render only this enumeration, without a heading
        #[arg(long = "enum")]
        enum_name: Option<String>,

        /// Placed between items
        #[arg(long, default_value = "\n")]
        delimiter: String,

        /// Placed before each item; empty for none
        #[arg(long, default_value = "*")]
        prefix: String,

        /// Placed on both sides of each value
        #[arg(long, default_value = "`")]
        value_wrap: String,
    },

    /// Fail if any enumeration declares a value twice
    Check {
        /// Definitions document
        file: PathBuf,
    },

    /// Print the name of the member matching a value
    Lookup {
        /// Definitions document
        file: PathBuf,

        /// Enumeration to search
        enum_name: String,

        /// JSON value, or plain text when it is not valid JSON
        value: String,
    },
}

fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    init_logging(&LogConfig {
        log_level: parse_level(&args.log_level),
        json_format: args.log_json,
    })?;

    let output = run(args.command)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Markdown {
            file,
            enum_name,
            delimiter,
            prefix,
            value_wrap,
        } => {
            let definitions = load_definitions(&file)?;
            let options = MarkdownOptions {
                delimiter,
                prefix,
                value_wrap,
            };
            match enum_name {
                Some(name) => Ok(format_dynamic_to_markdown(find_enum(&definitions, &name)?, &options)),
                None => Ok(definitions
                    .enums()
                    .map(|definition| {
                        format!(
                            "## {}\n\n{}",
                            definition.name(),
                            format_dynamic_to_markdown(definition, &options)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n\n")),
            }
        }
        Command::Check { file } => {
            let definitions = load_definitions(&file)?;
            let failures = definitions.check_unique();
            if !failures.is_empty() {
                let report = failures
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n");
                bail!("{report}");
            }
            Ok(format!("{} enumerations checked, no duplicate values", definitions.len()))
        }
        Command::Lookup {
            file,
            enum_name,
            value,
        } => {
            let definitions = load_definitions(&file)?;
            let definition = find_enum(&definitions, &enum_name)?;
            let candidate = parse_candidate(&value);
            let member = definition.lookup_json(&candidate)?;
            Ok(member.name().to_string())
        }
    }
}

fn load_definitions(path: &Path) -> Result<DefinitionSet> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read definitions from {}", path.display()))?;
    let definitions = DefinitionSet::from_json_str(&content)
        .wrap_err_with(|| format!("Failed to load definitions from {}", path.display()))?;
    info!(
        path = %path.display(),
        enums = definitions.len(),
        "Loaded enumeration definitions"
    );
    Ok(definitions)
}

fn find_enum<'a>(definitions: &'a DefinitionSet, name: &str) -> Result<&'a DynamicEnum> {
    definitions
        .get(name)
        .ok_or_else(|| eyre!("Unknown enumeration: {name}"))
}

/// Values that are not valid JSON are taken as plain text, so `open` and
/// `"open"` look up the same member.
fn parse_candidate(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| {
        debug!(raw, "Lookup value is not JSON, using it as text");
        Value::String(raw.to_string())
    })
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
