mod audio;
mod cli;
mod config;
mod transform;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use cli::{Cli, OutputFormat};
use transform::params::TransformParams;
use transform::report;
use transform::state::TransformState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut cli = Cli::parse();

    if let Some(ref path) = config::discover(cli.config.as_deref()) {
        if let Some(cfg) = config::load_config(path) {
            log::info!("Loaded config from {}", path.display());
            merge_config(&mut cli, cfg);
        } else {
            log::warn!("Failed to load config from {}", path.display());
        }
    }

    let params = TransformParams {
        sample_rate: cli.sample_rate,
        block_size: cli.block_size,
        spectrum_size: cli.spectrum_size,
        lowest_frequency: cli.lowest,
        highest_frequency: cli.highest,
        golden_f0: cli.golden_f0,
    };

    log::info!(
        "Sample rate: {}Hz, block: {}, bins: {}, band: {}-{}Hz",
        params.sample_rate,
        params.block_size,
        params.spectrum_size,
        params.lowest_frequency,
        params.highest_frequency
    );

    let golden = match cli.golden {
        Some(ref path) => {
            if !path.exists() {
                anyhow::bail!("Golden file not found: {}", path.display());
            }
            let signal = audio::decode::decode_golden(path)?;
            if signal.sample_rate != params.sample_rate {
                log::warn!(
                    "Golden signal is {}Hz but transform runs at {}Hz",
                    signal.sample_rate,
                    params.sample_rate
                );
            }
            Some(signal)
        }
        None => None,
    };

    let state = TransformState::from_params(&params, golden.as_ref().map(|g| g.samples.as_slice()))
        .context("Failed to build transform state")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => report::write_text(&state, &mut out)?,
        OutputFormat::Json => {
            let json = report::to_json(&state).context("Failed to serialize table")?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()?;

    Ok(())
}

/// Config values apply only where the CLI is still at its default.
fn merge_config(cli: &mut Cli, cfg: config::Config) {
    let defaults = TransformParams::default();
    let t = cfg.transform;
    if cli.sample_rate == defaults.sample_rate { cli.sample_rate = t.sample_rate; }
    if cli.block_size == defaults.block_size { cli.block_size = t.block_size; }
    if cli.spectrum_size == defaults.spectrum_size { cli.spectrum_size = t.spectrum_size; }
    if cli.lowest == defaults.lowest_frequency { cli.lowest = t.lowest_frequency; }
    if cli.highest == defaults.highest_frequency { cli.highest = t.highest_frequency; }
    if cli.golden_f0 == defaults.golden_f0 { cli.golden_f0 = t.golden_f0; }
    if cli.format == OutputFormat::Text { cli.format = cfg.output.format; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_fills_defaulted_flags_only() {
        let mut cli = Cli::parse_from(["pdwt", "--spectrum-size", "64"]);
        let cfg = config::Config {
            transform: TransformParams {
                spectrum_size: 2048,
                lowest_frequency: 20.0,
                ..TransformParams::default()
            },
            output: config::OutputConfig {
                format: OutputFormat::Json,
            },
        };
        merge_config(&mut cli, cfg);
        assert_eq!(cli.spectrum_size, 64);
        assert_eq!(cli.lowest, 20.0);
        assert_eq!(cli.highest, 1100.0);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
