mod csv;
mod json;
mod text;

use serde::Serialize;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// One filtering pass, as seen by a formatter
///
/// Built from three arrays of the same length `N`, so every row has a tap,
/// an input sample and an output sample.
///
/// ```compile_fail
/// use mprjfir::output::FirOutput;
///
/// let pass = FirOutput::new(&[1], &[1], &[1, 2]);
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FirOutput<'a> {
    taps: &'a [i32],
    input: &'a [i32],
    output: &'a [i32],
}

impl<'a> FirOutput<'a> {
    pub fn new<const N: usize>(
        taps: &'a [i32; N],
        input: &'a [i32; N],
        output: &'a [i32; N],
    ) -> Self {
        Self {
            taps,
            input,
            output,
        }
    }

    /// Rows of `(index, input, tap, output)`
    pub fn rows(&self) -> impl Iterator<Item = (usize, i32, i32, i32)> + '_ {
        self.input
            .iter()
            .zip(self.taps)
            .zip(self.output)
            .enumerate()
            .map(|(i, ((&x, &h), &y))| (i, x, h, y))
    }

    pub fn output(&self) -> &'a [i32] {
        self.output
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}

pub trait Formatter {
    fn format(&self, output: &FirOutput<'_>) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_pair_every_sample() {
        let pass = FirOutput::new(&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]);
        let rows: Vec<_> = pass.rows().collect();
        assert_eq!(rows, vec![(0, 4, 1, 7), (1, 5, 2, 8), (2, 6, 3, 9)]);
        assert_eq!(pass.len(), 3);
    }

    #[test]
    fn test_every_format_handles_single_sample() {
        let pass = FirOutput::new(&[1], &[1], &[1]);
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv] {
            for verbose in [false, true] {
                assert!(!create_formatter(format, verbose).format(&pass).is_empty());
            }
        }
    }

    #[test]
    fn test_empty_pass() {
        let pass = FirOutput::new(&[], &[], &[]);
        assert!(pass.is_empty());
        assert_eq!(CsvFormatter.format(&pass), "");
        assert_eq!(TextFormatter::new(false).format(&pass), "Output: []");
    }
}
