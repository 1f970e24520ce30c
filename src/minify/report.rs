//! Byte-savings measurement for a minification run

use serde::Serialize;

/// Size comparison between a document and its minified form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinifyReport {
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub saved_bytes: usize,
    pub saved_percent: f64,
}

impl MinifyReport {
    pub fn measure(input: &str, output: &str) -> Self {
        let input_bytes = input.len();
        let output_bytes = output.len();
        let saved_bytes = input_bytes.saturating_sub(output_bytes);
        let saved_percent = if input_bytes == 0 {
            0.0
        } else {
            saved_bytes as f64 / input_bytes as f64 * 100.0
        };
        Self {
            input_bytes,
            output_bytes,
            saved_bytes,
            saved_percent,
        }
    }
}
