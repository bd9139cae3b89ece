// 📄 CSV Batch Readings
// name,birthdate in → one row of numbers (or an error) per input row out

use crate::numbers::InsightType;
use crate::reading::Reading;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::{Read, Write};
use tracing::{info, warn};

/// One input row. Blank cells mean "not provided".
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birthdate: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.processed - self.failed
    }
}

/// Output header: inputs, every number column, then `error`
pub fn header() -> Vec<String> {
    let mut columns = vec!["name".to_string(), "birthdate".to_string()];
    columns.extend(InsightType::ALL.iter().map(|kind| kind.code().to_string()));
    columns.push("error".to_string());
    columns
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Process every row of `reader` into `writer`.
///
/// Engine failures are recorded per row; only malformed CSV or I/O errors abort.
pub fn run<R: Read, W: Write>(reader: R, writer: W, target: NaiveDate) -> Result<BatchSummary> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(header()).context("Failed to write CSV header")?;

    let mut summary = BatchSummary::default();

    for (index, result) in rdr.deserialize().enumerate() {
        let row: BatchRow = result.with_context(|| format!("Failed to read CSV row {}", index + 1))?;
        let name = non_blank(&row.name);
        let birthdate = non_blank(&row.birthdate);

        let mut record = vec![
            name.unwrap_or_default().to_string(),
            birthdate.unwrap_or_default().to_string(),
        ];

        match Reading::calculate(birthdate, name, target) {
            Ok(reading) => {
                for kind in InsightType::ALL {
                    record.push(reading.get(kind).map(|n| n.to_string()).unwrap_or_default());
                }
                record.push(String::new());
            }
            Err(e) => {
                warn!(row = index + 1, error = %e, "batch row failed");
                record.extend(InsightType::ALL.iter().map(|_| String::new()));
                record.push(e.to_string());
                summary.failed += 1;
            }
        }

        wtr.write_record(&record)
            .with_context(|| format!("Failed to write CSV row {}", index + 1))?;
        summary.processed += 1;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    info!(processed = summary.processed, failed = summary.failed, "batch complete");
    Ok(summary)
}
