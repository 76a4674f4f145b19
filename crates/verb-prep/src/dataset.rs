//! Dataset I/O: the JSON array shared by the normalizer and the materializer

use crate::types::*;
use std::path::Path;

/// Load the dataset written by the normalizer
pub async fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<VerbRecord>> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let records = serde_json::from_slice(&bytes)?;
    Ok(records)
}

/// Overwrite the dataset in full.
///
/// Pretty-printed with a two-space indent; non-ASCII text is written as-is.
pub async fn save_dataset(records: &[VerbRecord], path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(records)?;
    tokio::fs::write(path.as_ref(), json).await?;
    Ok(())
}

pub(crate) fn to_json(records: &[VerbRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
