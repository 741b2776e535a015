use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;
use std::fs::File;

use crate::error::LoadError;
use crate::form::Outcome;
use crate::schedule::Interval;

/// Writes every interval of the outcome in input order as
/// `label,start,end,selected`
pub fn write_selection_csv<W: Write>(outcome: &Outcome, writer: W) -> Result<(), LoadError> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    let mask = outcome.selection.mask(outcome.schedule.len());

    wtr.write_record(["label", "start", "end", "selected"])?;
    for (index, interval) in outcome.schedule.intervals.iter().enumerate() {
        wtr.write_record([
            Interval::label(index),
            interval.start.to_string(),
            interval.end.to_string(),
            if mask[index] { "yes" } else { "no" }.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Renders the export CSV into a string (used for the download endpoint)
pub fn selection_to_csv(outcome: &Outcome) -> Result<String, LoadError> {
    let mut buf = Vec::new();
    write_selection_csv(outcome, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes the export CSV to `csv_path`, replacing any existing file
pub fn export_selection_to_csv(outcome: &Outcome, csv_path: &Path) -> Result<(), LoadError> {
    let file = File::create(csv_path)?;
    write_selection_csv(outcome, file)
}
