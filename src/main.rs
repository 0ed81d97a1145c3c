use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::io::Read;

use entkit::{codec, logging, numeric, sequence};

#[derive(Parser)]
#[command(name = "entkit")]
#[command(about = "Entity encoding and small text/number helpers")]
#[command(version)]
struct Cli {
    /// Enable debug logging to file
    #[arg(short, long, global = true)]
    debug: bool,

    /// Print a JSON report instead of the bare result
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode markup-sensitive characters as entities
    Encode {
        /// Text to encode (read from stdin if omitted)
        text: Option<String>,
    },
    /// Decode entities back into literal characters
    Decode {
        /// Text to decode (read from stdin if omitted)
        text: Option<String>,
    },
    /// Strip leading and trailing whitespace
    Trim {
        text: Option<String>,
    },
    /// Report whether text is empty or whitespace only
    IsEmpty {
        text: Option<String>,
    },
    /// Report whether text contains markup tags
    ContainsTags {
        text: Option<String>,
    },
    /// Constrain a number to a range
    Clamp {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },
    /// Random number within a range
    Random {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
        /// Keep the fractional part
        #[arg(long)]
        no_round: bool,
    },
    /// Drop the fractional part of a number
    Integer {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Wrap an index onto a sequence of the given length
    WrapIndex {
        len: usize,
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

#[derive(Serialize)]
struct Report {
    command: &'static str,
    input: serde_json::Value,
    output: serde_json::Value,
    /// Bare rendering of the result; JSON has no spelling for inf or NaN
    #[serde(skip)]
    plain: String,
}

fn read_text(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;

    // Drop the newline a shell pipe adds
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

fn run(command: Command) -> Result<Report> {
    let report = match command {
        Command::Encode { text } => {
            let input = read_text(text)?;
            let output = codec::encode(&input);
            Report { command: "encode", input: json!(input), output: json!(output), plain: output }
        }
        Command::Decode { text } => {
            let input = read_text(text)?;
            let output = codec::decode(&input);
            Report { command: "decode", input: json!(input), output: json!(output), plain: output }
        }
        Command::Trim { text } => {
            let input = read_text(text)?;
            let output = entkit::trim(&input).to_owned();
            Report { command: "trim", input: json!(input), output: json!(output), plain: output }
        }
        Command::IsEmpty { text } => {
            let input = read_text(text)?;
            let output = entkit::is_empty(&input);
            Report { command: "is-empty", input: json!(input), output: json!(output), plain: output.to_string() }
        }
        Command::ContainsTags { text } => {
            let input = read_text(text)?;
            let output = entkit::contains_tags(&input);
            Report { command: "contains-tags", input: json!(input), output: json!(output), plain: output.to_string() }
        }
        Command::Clamp { value, min, max } => {
            let output = numeric::constrain_to_range(value, min, max)
                .context("Failed to constrain value")?;
            Report {
                command: "clamp",
                input: json!({ "value": value, "min": min, "max": max }),
                output: json!(output),
                plain: output.to_string(),
            }
        }
        Command::Random { min, max, no_round } => {
            let output = numeric::random_within_range_with(&mut rand::thread_rng(), min, max, !no_round)
                .context("Failed to generate random number")?;
            Report {
                command: "random",
                input: json!({ "min": min, "max": max, "round": !no_round }),
                output: json!(output),
                plain: output.to_string(),
            }
        }
        Command::Integer { value } => {
            let output = numeric::integer_truncate(value);
            Report {
                command: "integer",
                input: json!(value),
                output: json!(output),
                plain: output.to_string(),
            }
        }
        Command::WrapIndex { len, index } => {
            let items = vec![(); len];
            let output = sequence::wrapped_index(&items, index)
                .context("Failed to wrap index")?;
            Report {
                command: "wrap-index",
                input: json!({ "len": len, "index": index }),
                output: json!(output),
                plain: output.to_string(),
            }
        }
    };

    log::debug!("{} -> {}", report.command, report.plain);
    Ok(report)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging if debug is enabled
    if cli.debug {
        let log_file = logging::setup_debug_logging(&logging::log_dir()?)?;
        log::info!("Debug logging enabled: {}", log_file.display());
    }

    let report = run(cli.command)?;

    if cli.json {
        let rendered = serde_json::to_string_pretty(&report)
            .context("Failed to serialize report")?;
        println!("{}", rendered);
    } else {
        println!("{}", report.plain);
    }

    Ok(())
}
