use super::{FirOutput, Formatter};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, output: &FirOutput<'_>) -> String {
        if self.verbose {
            output
                .rows()
                .map(|(i, x, h, y)| format!("y[{:>2}] = {:>11}  (x: {:>6}, h: {:>6})", i, y, x, h))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            let values: Vec<String> = output.output().iter().map(|y| y.to_string()).collect();
            format!("Output: [{}]", values.join(", "))
        }
    }
}
