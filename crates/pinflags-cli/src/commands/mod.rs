//! CLI command implementations.

use anyhow::{Context, Result};
use pinflags_config::{Diagnostic, ParseOutcome};
use pinflags_core::{DeviceKind, FlagFormat};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the configuration and log every diagnostic.
fn load_reported(config: &Path) -> ParseOutcome {
    debug!(path = %config.display(), "Reading device configuration");
    let outcome = pinflags_config::load(config);
    for diagnostic in &outcome.diagnostics {
        match diagnostic.section() {
            Some(section) => warn!(section, "{}", diagnostic),
            None => warn!("{}", diagnostic),
        }
    }
    outcome
}

/// Print the flags for every valid device. Configuration problems never fail
/// this command.
pub fn generate(config: &Path, selector: &str, output: Option<&Path>) -> Result<()> {
    let format = FlagFormat::from_selector(selector);
    let outcome = load_reported(config);
    let flags = outcome.flags();
    debug!(%format, devices = outcome.records.len(), "Rendering flags");

    let joined = format.join(&flags);
    match output {
        Some(path) => std::fs::write(path, format!("{joined}\n"))
            .with_context(|| format!("Failed to write flags to {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{joined}").context("Failed to write flags to stdout")?;
        }
    }

    if flags.is_empty() {
        info!("No device macros generated");
    } else {
        info!("Generated {} device macro definitions", flags.len());
    }
    Ok(())
}

/// Fail if anything in the configuration was skipped.
pub fn validate(config: &Path) -> Result<()> {
    let outcome = load_reported(config);
    if outcome.is_clean() {
        println!(
            "Configuration is valid ({} devices)",
            outcome.records.len()
        );
        return Ok(());
    }

    let missing = outcome
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::MissingSource { .. }));
    if missing {
        anyhow::bail!("Configuration not found: {}", config.display());
    }
    anyhow::bail!(
        "Configuration has {} problem(s); {} valid devices",
        outcome.diagnostics.len(),
        outcome.records.len()
    );
}

/// Print parsed records as pretty JSON.
pub fn list(config: &Path, kind: Option<DeviceKind>) -> Result<()> {
    let outcome = load_reported(config);
    let records: Vec<_> = outcome
        .records
        .iter()
        .filter(|r| kind.is_none_or(|k| r.kind == k))
        .collect();
    let json = serde_json::to_string_pretty(&records).context("Failed to serialize devices")?;
    println!("{json}");
    Ok(())
}
