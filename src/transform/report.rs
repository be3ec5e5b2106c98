use serde::Serialize;
use std::io::Write;

use super::state::{Bin, TransformState};

/// Serializable snapshot of a built state's table.
#[derive(Debug, Serialize)]
pub struct TableReport {
    pub sample_rate: u32,
    pub block_size: usize,
    pub spectrum_size: usize,
    pub lowest_frequency: f32,
    pub highest_frequency: f32,
    pub golden_f0: f32,
    pub golden_sample_count: Option<usize>,
    /// Size in bytes of one coefficient element
    pub coefficient_size: usize,
    pub bins: Vec<Bin>,
}

impl TableReport {
    pub fn new(state: &TransformState<'_>) -> Self {
        Self {
            sample_rate: state.sample_rate(),
            block_size: state.block_size(),
            spectrum_size: state.spectrum_size(),
            lowest_frequency: state.lowest_frequency(),
            highest_frequency: state.highest_frequency(),
            golden_f0: state.golden_f0(),
            golden_sample_count: state.golden_samples().map(|g| g.len()),
            coefficient_size: std::mem::size_of::<f32>(),
            bins: state.bins().collect(),
        }
    }
}

/// Write the plain-text table: a two-line header followed by one
/// `Freq <i>: <f> - Coef: <re>,<im>i` line per bin.
pub fn write_text<W: Write>(state: &TransformState<'_>, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Sample Rate : {}", state.sample_rate())?;
    writeln!(out, "Size : {}", std::mem::size_of::<f32>())?;
    for bin in state.bins() {
        writeln!(
            out,
            "Freq {}: {:.6} - Coef: {:.6},{:.6}i",
            bin.index, bin.frequency, bin.real, bin.imag
        )?;
    }
    Ok(())
}

pub fn to_json(state: &TransformState<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&TableReport::new(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &TransformState<'_>) -> String {
        let mut buf = Vec::new();
        write_text(state, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_table_format() {
        let state = TransformState::build(44100, 16, 512, 100.0, 1100.0, None, 440.0).unwrap();
        let text = render(&state);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2 + 512);
        assert_eq!(lines[0], "Sample Rate : 44100");
        assert_eq!(lines[1], "Size : 4");
        assert_eq!(lines[2], "Freq 0: 100.000000 - Coef: -0.941544,0.336890i");
        assert!(lines[513].starts_with("Freq 511: 1098.046875 - Coef: "));
    }

    #[test]
    fn json_report_fields() {
        let golden = [0.0f32; 10];
        let state = TransformState::build(8000, 4, 3, 0.0, 300.0, Some(&golden), 100.0).unwrap();
        let json = to_json(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["sample_rate"], 8000);
        assert_eq!(value["block_size"], 4);
        assert_eq!(value["spectrum_size"], 3);
        assert_eq!(value["golden_sample_count"], 10);
        assert_eq!(value["coefficient_size"], 4);

        let bins = value["bins"].as_array().unwrap();
        assert_eq!(bins.len(), 3);
        assert_eq!(bins[1]["index"], 1);
        assert_eq!(bins[1]["frequency"].as_f64().unwrap(), 100.0);
    }

    #[test]
    fn json_without_golden_is_null() {
        let state = TransformState::build(8000, 4, 2, 0.0, 300.0, None, 100.0).unwrap();
        let report = TableReport::new(&state);
        assert!(report.golden_sample_count.is_none());
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["golden_sample_count"].is_null());
    }
}
