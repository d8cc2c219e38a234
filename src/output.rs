use std::io::Write;
use std::path::PathBuf;

use csv::{Terminator, WriterBuilder};
use log::info;

use crate::error::{io_err, Result, SundirError};
use crate::time::{format_local_time, from_utc, ZoneRule};
use crate::types::{Sample, Site};

pub const COLUMN_TITLES: [&str; 3] = ["Date", "AZ(deg)", "EL(deg)"];

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub timestamp: String,
    pub azimuth: f64,
    pub elevation: f64,
}

/// What a sink receives: labelled header values, then one row per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub header: Vec<(String, String)>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(site: &Site, samples: &[Sample], zone: &ZoneRule) -> Self {
        let header = vec![
            ("latitude".to_string(), site.latitude.text.clone()),
            ("longitude".to_string(), site.longitude.text.clone()),
            ("altitude(m)".to_string(), format_float(site.altitude)),
        ];
        let rows = samples
            .iter()
            .map(|sample| ReportRow {
                timestamp: format_local_time(&from_utc(&sample.instant, zone)),
                azimuth: sample.position.azimuth,
                elevation: sample.position.elevation,
            })
            .collect();
        Self { header, rows }
    }
}

/// Shortest text that reads back as the same float, always with a fraction
/// (`0.0`, `1.2`, `103.96467904620546`).
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

pub trait ResultSink {
    fn emit(&mut self, report: &Report) -> Result<()>;
}

/// Fixed-width table, numbers to four decimals.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, report: &Report) -> std::io::Result<()> {
        for (label, value) in &report.header {
            writeln!(self.out, "{label:<12}: {value}")?;
        }
        writeln!(
            self.out,
            "\n{:^22}{:>10}{:>10}",
            COLUMN_TITLES[0], COLUMN_TITLES[1], COLUMN_TITLES[2]
        )?;
        for row in &report.rows {
            let az = format!("{:.4}", row.azimuth);
            let el = format!("{:.4}", row.elevation);
            writeln!(self.out, "{:<22}{az:>10}{el:>10}", row.timestamp)?;
        }
        self.out.flush()
    }
}

impl<W: Write> ResultSink for ConsoleSink<W> {
    fn emit(&mut self, report: &Report) -> Result<()> {
        self.render(report).map_err(|e| io_err("<stdout>", e))
    }
}

/// Header rows, column titles, data rows; `\n` line endings. The file is
/// written in one go so a failure never leaves half a table behind.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn encode(&self, report: &Report) -> std::result::Result<Vec<u8>, csv::Error> {
        let mut writer = WriterBuilder::new()
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        for (label, value) in &report.header {
            writer.write_record([label.as_str(), value.as_str()])?;
        }
        writer.write_record(COLUMN_TITLES)?;
        for row in &report.rows {
            writer.write_record([
                row.timestamp.clone(),
                format_float(row.azimuth),
                format_float(row.elevation),
            ])?;
        }
        writer.into_inner().map_err(|e| e.into_error().into())
    }
}

impl ResultSink for CsvSink {
    fn emit(&mut self, report: &Report) -> Result<()> {
        let bytes = self.encode(report).map_err(|source| SundirError::Csv {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, bytes).map_err(|e| io_err(&self.path, e))?;
        info!("wrote {} rows to {}", report.rows.len(), self.path.display());
        Ok(())
    }
}
