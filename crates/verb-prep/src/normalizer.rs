//! The verb normalizer job: CSV rows in, deduplicated dataset out

use crate::csv::load_rows;
use crate::dataset::to_json;
use crate::normalize::*;
use crate::options::NormalizeOptions;
use crate::types::*;
use std::collections::HashSet;

/// Normalize rows into records.
///
/// Rows with an empty infinitive are dropped, as are rows whose id repeats
/// an earlier one (`give up` and `give_up` share `to_give_up`). Input order
/// is preserved.
pub fn normalize_rows(rows: &[VerbRow]) -> Vec<VerbRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let infinitive = normalize_infinitive(&row.infinitive);
        if infinitive.is_empty() {
            log::debug!("Skipping row without infinitive");
            continue;
        }
        let id = verb_id(&infinitive);
        if !seen.insert(id.clone()) {
            log::debug!("Skipping duplicate '{}' ({})", infinitive, id);
            continue;
        }

        records.push(VerbRecord {
            id,
            spanish: normalize_text(&row.spanish),
            pronunciation: normalize_text(&row.pronunciation),
            infinitive,
            past: normalize_verb_form(&row.simple_past),
            past_participle: normalize_verb_form(&row.past_participle),
            gerund: normalize_verb_form(&row.gerund),
            image: normalize_text(&row.image_url),
        });
    }

    records
}

/// Regenerate the dataset from the CSV.
///
/// The output file is only touched once every row has been read and
/// serialized.
pub async fn run_normalizer(options: &NormalizeOptions) -> Result<NormalizeReport> {
    options.validate()?;
    let rows = load_rows(&options.input_csv).await?;
    let records = normalize_rows(&rows);
    let json = to_json(&records)?;

    if let Some(parent) = options.output_json.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(&options.output_json, json).await?;

    log::info!(
        "Normalized {} of {} rows into {}",
        records.len(),
        rows.len(),
        options.output_json.display()
    );

    Ok(NormalizeReport {
        records: records.len(),
        output: options.output_json.clone(),
    })
}
