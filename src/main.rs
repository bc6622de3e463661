//! Extended public key format converter CLI

use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use xpub_kaleidoscope::display::{self, KeyInfo};
use xpub_kaleidoscope::{codec, registry, ConvertError, FormatDescriptor, FORMATS};

#[derive(Parser)]
#[command(name = "xpub-kaleidoscope")]
#[command(about = "Convert Bitcoin extended public keys between SLIP-0132 version-prefix formats")]
#[command(version)]
struct Cli {
    /// The extended public key to convert
    key: String,

    /// Target format to convert to
    #[arg(short = 't', long = "to", value_parser = known_tag)]
    to: Option<String>,

    /// Only identify the format of the key
    #[arg(short, long)]
    identify: bool,

    /// Convert to every other supported format, reporting each
    /// target independently
    #[arg(short, long)]
    all: bool,

    /// Emit machine-readable JSON instead of colored text
    #[arg(long)]
    json: bool,
}

/// Validate a `--to` argument against the registry
fn known_tag(s: &str) -> Result<String, String> {
    registry::lookup(s).map(|f| f.tag.to_string()).ok_or_else(|| {
        let tags: Vec<&str> = FORMATS.iter().map(|f| f.tag).collect();
        format!("unsupported format (expected one of: {})", tags.join(", "))
    })
}

/// One conversion target that could not be produced
#[derive(Debug, Serialize)]
struct FailedConversion {
    format: &'static str,
    error: String,
}

/// Full result of a CLI invocation, serialized as-is in `--json` mode
#[derive(Debug, Serialize)]
struct Report {
    input: KeyInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    converted: Vec<KeyInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failed: Vec<FailedConversion>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let source = match codec::identify(&cli.key) {
        Ok(fmt) => fmt,
        Err(e @ ConvertError::UnknownFormat(_)) => bail!("unknown key format: {}", e),
        Err(e) => bail!("invalid extended public key: {}", e),
    };

    let mut report = Report {
        input: display::key_info(source, &cli.key),
        converted: Vec::new(),
        failed: Vec::new(),
    };

    if cli.all {
        run_convert_all(&cli.key, source, &mut report);
    } else if let Some(target) = cli.to.as_deref().filter(|_| !cli.identify) {
        run_convert_one(&cli.key, source, target, &mut report)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n📥 Input key:");
        display::print_key_info(&report.input);
        if !report.converted.is_empty() {
            println!("\n📤 Converted:");
            for info in &report.converted {
                display::print_key_info(info);
            }
        }
        for failure in &report.failed {
            println!("\n❌ {}: {}", failure.format, failure.error);
        }
    }

    Ok(())
}

/// Convert to a single target format
fn run_convert_one(
    key: &str,
    source: &'static FormatDescriptor,
    target: &str,
    report: &mut Report,
) -> Result<()> {
    if target == source.tag {
        info!("key is already in {} format", target);
        return Ok(());
    }

    let Some(fmt) = registry::lookup(target) else {
        bail!("unsupported target format: {}", target);
    };
    let converted = codec::convert(key, target)?;
    report.converted.push(display::key_info(fmt, &converted));
    Ok(())
}

/// Convert to every other format, attempting each target independently
/// so one failure (e.g. a cross-network target) never hides the rest
fn run_convert_all(key: &str, source: &'static FormatDescriptor, report: &mut Report) {
    for fmt in &FORMATS {
        if fmt.tag == source.tag {
            continue;
        }
        match codec::convert(key, fmt.tag) {
            Ok(converted) => report.converted.push(display::key_info(fmt, &converted)),
            Err(e) => report.failed.push(FailedConversion {
                format: fmt.tag,
                error: e.to_string(),
            }),
        }
    }
}
