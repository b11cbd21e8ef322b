//! Terbilang CLI - convert one number to Indonesian words
//!
//! Examples:
//!   terbilang 1234567
//!   terbilang "1.234,56" --case title
//!   terbilang 12500.75 --currency idr --json

use clap::Parser;
use std::process::ExitCode;
use terbilang::{convert, CaseMode, ConvertOptions, Currency};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "terbilang", version, about = "Indonesian number-to-words (terbilang)")]
struct Cli {
    /// Number to convert, e.g. "1.234,56" or -2001
    #[arg(allow_hyphen_values = true)]
    angka: String,

    /// Output casing: lower, upper, title, sentence
    #[arg(long, default_value = "lower")]
    case: String,

    /// Also render as currency (idr / rupiah)
    #[arg(long)]
    currency: Option<String>,

    /// Print the full conversion as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> eyre::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let currency = match cli.currency.as_deref() {
        Some(raw) => match Currency::from_param(raw) {
            Some(currency) => Some(currency),
            None => eyre::bail!("unsupported currency: {}", raw),
        },
        None => None,
    };
    let options = ConvertOptions {
        case: CaseMode::from_param(Some(&cli.case)),
        currency,
    };

    match convert(&cli.angka, &options) {
        Ok(conversion) if cli.json => {
            println!("{}", serde_json::to_string_pretty(&conversion)?);
        }
        Ok(conversion) => {
            println!("{}", conversion.terbilang);
            if let Some(rupiah) = conversion.terbilang_idr {
                println!("{}", rupiah);
            }
        }
        Err(err) => {
            eprintln!("❌ {}", err);
            return Ok(ExitCode::from(2));
        }
    }

    Ok(ExitCode::SUCCESS)
}
