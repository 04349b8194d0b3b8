use super::{FirOutput, Formatter};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, output: &FirOutput<'_>) -> String {
        output
            .rows()
            .map(|(i, x, h, y)| format!("{},{},{},{}", i, x, h, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(&self) -> Option<&'static str> {
        Some("index,input,tap,output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_rows() {
        let out = FirOutput::new(&[1, 2], &[3, 4], &[9, 4]);
        assert_eq!(CsvFormatter.format(&out), "0,3,1,9\n1,4,2,4");
        assert_eq!(CsvFormatter.header(), Some("index,input,tap,output"));
    }
}
