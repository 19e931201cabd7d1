#![deny(unsafe_code)]
//! CLI binary for the swatch color toolkit.
//!
//! Subcommands:
//! - `convert <color>` — parse a color string, print it in another notation
//! - `inspect <color>` — print every representation of a color

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::process;
use swatch_core::{
    format, parse_with_alpha, preview_string, AlphaChannel, ColorViews, OutputFormat,
};

#[derive(Parser)]
#[command(name = "swatch", about = "Color conversion and inspection CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a color string and print it in another notation.
    Convert {
        /// Input color: hex, rgb(a), hsl(a), or cmyk notation.
        color: String,

        /// Output format (hex, rgba, hsla, cmyk).
        #[arg(short, long, default_value = "hex")]
        to: String,

        /// Treat 8-digit hex input as carrying an alpha byte, and emit
        /// 8-digit hex output.
        #[arg(long)]
        hex8: bool,
    },
    /// Print every representation of a color.
    Inspect {
        /// Input color: hex, rgb(a), hsl(a), or cmyk notation.
        color: String,

        /// Treat 8-digit hex input as carrying an alpha byte.
        #[arg(long)]
        hex8: bool,
    },
}

fn alpha_channel(hex8: bool) -> AlphaChannel {
    if hex8 {
        AlphaChannel::Hex8
    } else {
        AlphaChannel::Hex6
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert { color, to, hex8 } => {
            let output = OutputFormat::from_name(&to)?;
            let hsva = parse_with_alpha(&color, alpha_channel(hex8))?;
            let rendered = format(hsva, output, hex8);

            if cli.json {
                let info = serde_json::json!({
                    "input": color,
                    "format": output.name(),
                    "output": rendered,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{rendered}");
            }
        }
        Command::Inspect { color, hex8 } => {
            let hsva = parse_with_alpha(&color, alpha_channel(hex8))?;
            let views = ColorViews::derive(hsva);
            let preview = preview_string(hsva);

            if cli.json {
                let info = serde_json::json!({
                    "input": color,
                    "hsva": views.hsva,
                    "rgba": views.rgba,
                    "hsla": views.hsla,
                    "cmyk": views.cmyk,
                    "hex": views.hex,
                    "preview": preview,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for output in [
                    OutputFormat::Hex,
                    OutputFormat::Rgba,
                    OutputFormat::Hsla,
                    OutputFormat::Cmyk,
                ] {
                    println!("{:<8}{}", output.name(), format(hsva, output, hex8));
                }
                println!("{:<8}{preview}", "preview");
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
