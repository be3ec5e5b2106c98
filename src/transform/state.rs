use rustfft::num_complex::Complex;
use serde::Serialize;

use super::error::TransformError;
use super::params::TransformParams;

/// One row of the coefficient table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bin {
    pub index: usize,
    /// Mapped frequency (Hz)
    pub frequency: f32,
    pub real: f32,
    pub imag: f32,
}

/// Initialized transform state: sample buffers, spectra, the linear frequency
/// axis and the per-bin coefficient table.
///
/// The golden signal is borrowed from the caller and never owned here. All other
/// buffers are owned and released when the state is dropped.
#[derive(Clone, Debug)]
pub struct TransformState<'a> {
    sample_rate: u32,
    current_index: usize,
    block_size: usize,
    spectrum_size: usize,
    lowest_frequency: f32,
    highest_frequency: f32,
    golden_f0: f32,
    golden_samples: Option<&'a [f32]>,

    frequencies: Vec<f32>,
    fourier_coef_real: Vec<f32>,
    fourier_coef_imag: Vec<f32>,
    spectrum: Vec<f32>,
    last_spectrum: Vec<f32>,
    samples_in: Vec<f32>,
    samples_out: Vec<f32>,
}

#[allow(dead_code)]
impl<'a> TransformState<'a> {
    /// Validate the parameters, allocate every buffer and fill the frequency
    /// axis and coefficient table.
    ///
    /// Bin `i` maps to `i * (highest - lowest) / spectrum_size + lowest`, so the
    /// sweep starts at `lowest_frequency` and stops one step short of
    /// `highest_frequency`. Its coefficients are `sin` and `cos` of
    /// `-2π * frequency / spectrum_size`.
    ///
    /// Sample buffers and spectra are zero-filled.
    pub fn build(
        sample_rate: u32,
        block_size: usize,
        spectrum_size: usize,
        lowest_frequency: f32,
        highest_frequency: f32,
        golden_samples: Option<&'a [f32]>,
        golden_f0: f32,
    ) -> Result<Self, TransformError> {
        if spectrum_size == 0 {
            return Err(TransformError::invalid("spectrum_size must be greater than 0"));
        }
        if sample_rate == 0 {
            return Err(TransformError::invalid("sample_rate must be greater than 0"));
        }
        if !lowest_frequency.is_finite() || !highest_frequency.is_finite() {
            return Err(TransformError::invalid(format!(
                "frequency band must be finite, got {}..{}",
                lowest_frequency, highest_frequency
            )));
        }
        if !golden_f0.is_finite() {
            return Err(TransformError::invalid(format!(
                "golden_f0 must be finite, got {}",
                golden_f0
            )));
        }
        if highest_frequency < lowest_frequency {
            log::warn!(
                "Inverted frequency band {:.3}..{:.3} Hz, sweep will descend",
                lowest_frequency,
                highest_frequency
            );
        }

        let samples_in = zeroed("samples_in", block_size)?;
        let samples_out = zeroed("samples_out", block_size)?;
        let spectrum = zeroed("spectrum", spectrum_size)?;
        let last_spectrum = zeroed("last_spectrum", spectrum_size)?;

        let step = (highest_frequency - lowest_frequency) / spectrum_size as f32;
        let mut frequencies = reserved("frequencies", spectrum_size)?;
        frequencies.extend((0..spectrum_size).map(|i| i as f32 * step + lowest_frequency));

        let mut fourier_coef_real = reserved("fourier_coef_real", spectrum_size)?;
        let mut fourier_coef_imag = reserved("fourier_coef_imag", spectrum_size)?;
        for &freq in &frequencies {
            let angle = -2.0 * std::f64::consts::PI * freq as f64 / spectrum_size as f64;
            fourier_coef_real.push(angle.sin() as f32);
            fourier_coef_imag.push(angle.cos() as f32);
        }

        log::debug!(
            "Built transform state: {} bins over {:.3}-{:.3} Hz, block size {}, golden samples {}",
            spectrum_size,
            lowest_frequency,
            highest_frequency,
            block_size,
            golden_samples.map_or(0, |g| g.len())
        );

        Ok(Self {
            sample_rate,
            current_index: 0,
            block_size,
            spectrum_size,
            lowest_frequency,
            highest_frequency,
            golden_f0,
            golden_samples,
            frequencies,
            fourier_coef_real,
            fourier_coef_imag,
            spectrum,
            last_spectrum,
            samples_in,
            samples_out,
        })
    }

    pub fn from_params(
        params: &TransformParams,
        golden_samples: Option<&'a [f32]>,
    ) -> Result<Self, TransformError> {
        Self::build(
            params.sample_rate,
            params.block_size,
            params.spectrum_size,
            params.lowest_frequency,
            params.highest_frequency,
            golden_samples,
            params.golden_f0,
        )
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Stream cursor. Always 0 until a processing loop advances it.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn spectrum_size(&self) -> usize {
        self.spectrum_size
    }

    pub fn lowest_frequency(&self) -> f32 {
        self.lowest_frequency
    }

    pub fn highest_frequency(&self) -> f32 {
        self.highest_frequency
    }

    pub fn golden_f0(&self) -> f32 {
        self.golden_f0
    }

    pub fn golden_samples(&self) -> Option<&'a [f32]> {
        self.golden_samples
    }

    pub fn frequencies(&self) -> &[f32] {
        &self.frequencies
    }

    pub fn fourier_coef_real(&self) -> &[f32] {
        &self.fourier_coef_real
    }

    pub fn fourier_coef_imag(&self) -> &[f32] {
        &self.fourier_coef_imag
    }

    pub fn spectrum(&self) -> &[f32] {
        &self.spectrum
    }

    pub fn last_spectrum(&self) -> &[f32] {
        &self.last_spectrum
    }

    pub fn samples_in(&self) -> &[f32] {
        &self.samples_in
    }

    pub fn samples_out(&self) -> &[f32] {
        &self.samples_out
    }

    pub fn bin_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Coefficient pair of bin `index` as `real + imag·i`.
    pub fn coefficient(&self, index: usize) -> Option<Complex<f32>> {
        let re = *self.fourier_coef_real.get(index)?;
        let im = *self.fourier_coef_imag.get(index)?;
        Some(Complex::new(re, im))
    }

    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.frequencies
            .iter()
            .zip(self.fourier_coef_real.iter().zip(self.fourier_coef_imag.iter()))
            .enumerate()
            .map(|(index, (&frequency, (&real, &imag)))| Bin {
                index,
                frequency,
                real,
                imag,
            })
    }
}

fn reserved(buffer: &'static str, len: usize) -> Result<Vec<f32>, TransformError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| TransformError::AllocationFailure { buffer, len })?;
    Ok(buf)
}

fn zeroed(buffer: &'static str, len: usize) -> Result<Vec<f32>, TransformError> {
    let mut buf = reserved(buffer, len)?;
    buf.resize(len, 0.0);
    Ok(buf)
}
