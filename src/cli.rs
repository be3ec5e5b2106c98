use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pdwt", about = "Partial DWT coefficient table initializer")]
pub struct Cli {
    /// Sample rate in Hz
    #[arg(long, default_value_t = 44100)]
    pub sample_rate: u32,

    /// Length of the time-domain sample buffers
    #[arg(long, default_value_t = 16)]
    pub block_size: usize,

    /// Number of frequency bins
    #[arg(long, default_value_t = 512)]
    pub spectrum_size: usize,

    /// Lower edge of the frequency sweep (Hz)
    #[arg(long, default_value_t = 100.0)]
    pub lowest: f32,

    /// Upper edge of the frequency sweep (Hz, exclusive)
    #[arg(long, default_value_t = 1100.0)]
    pub highest: f32,

    /// Reference fundamental of the golden signal (Hz)
    #[arg(long, default_value_t = 440.0)]
    pub golden_f0: f32,

    /// Audio file holding the golden reference signal (WAV, MP3, FLAC, OGG)
    #[arg(long)]
    pub golden: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file (defaults to ./pdwt.toml or the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
