//! Renders scanner results as a text table or CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::scanner::StudentScanner;

pub const CSV_HEADER: [&str; 3] = ["algorithm", "size", "time_ns"];

const RULE: &str = "------------------------------------";

pub fn stats_table(scanners: &[StudentScanner]) -> String {
    let mut out = String::new();
    out.push_str("algorithm size time (ns)\n");
    out.push_str(RULE);
    out.push('\n');

    for scanner in scanners {
        out.push_str(&scanner.stats());
        out.push('\n');
    }

    out.push_str(RULE);
    out.push('\n');

    out
}

pub fn write_csv<W: Write>(writer: W, scanners: &[StudentScanner]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for scanner in scanners {
        wtr.write_record([
            scanner.algorithm().label().to_string(),
            scanner.len().to_string(),
            scanner.scan_time_ns().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn export_csv(path: impl AsRef<Path>, scanners: &[StudentScanner]) -> csv::Result<()> {
    let file = File::create(path)?;
    write_csv(file, scanners)
}
