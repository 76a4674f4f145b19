use crate::constants::REQUIRED_COLUMNS;
use crate::types::{PrepError, Result, VerbRow};
use std::path::Path;

/// Read verb rows from a CSV file with a header row.
///
/// Columns are matched by header name; extra columns are ignored and short
/// rows read their absent cells as empty.
pub async fn load_rows(path: impl AsRef<Path>) -> Result<Vec<VerbRow>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let rows = tokio::task::spawn_blocking(move || parse_rows(contents.as_bytes())).await??;

    log::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub(crate) fn parse_rows(input: &[u8]) -> Result<Vec<VerbRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(columns.row(&record));
    }
    Ok(rows)
}

/// Header positions of the required columns, in `REQUIRED_COLUMNS` order
struct ColumnMap([usize; REQUIRED_COLUMNS.len()]);

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let mut positions = [0; REQUIRED_COLUMNS.len()];
        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
                .ok_or(PrepError::MissingColumn(name))?;
        }
        Ok(Self(positions))
    }

    fn row(&self, record: &csv::StringRecord) -> VerbRow {
        let cell = |i: usize| record.get(self.0[i]).unwrap_or_default().to_string();
        VerbRow {
            infinitive: cell(0),
            spanish: cell(1),
            pronunciation: cell(2),
            simple_past: cell(3),
            past_participle: cell(4),
            gerund: cell(5),
            image_url: cell(6),
        }
    }
}
