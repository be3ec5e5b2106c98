use serde::{Deserialize, Serialize};

/// Numeric inputs to [`TransformState::build`](super::state::TransformState::build).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TransformParams {
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_block_size")]
    pub block_size: usize,
    #[serde(default = "default_spectrum_size")]
    pub spectrum_size: usize,
    #[serde(default = "default_lowest_frequency")]
    pub lowest_frequency: f32,
    #[serde(default = "default_highest_frequency")]
    pub highest_frequency: f32,
    #[serde(default = "default_golden_f0")]
    pub golden_f0: f32,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            block_size: default_block_size(),
            spectrum_size: default_spectrum_size(),
            lowest_frequency: default_lowest_frequency(),
            highest_frequency: default_highest_frequency(),
            golden_f0: default_golden_f0(),
        }
    }
}

fn default_sample_rate() -> u32 { 44100 }
fn default_block_size() -> usize { 16 }
fn default_spectrum_size() -> usize { 512 }
fn default_lowest_frequency() -> f32 { 100.0 }
fn default_highest_frequency() -> f32 { 1100.0 }
fn default_golden_f0() -> f32 { 440.0 }
