use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("Encode error: {0}")]
    Encode(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PrepError>;

/// One dictionary entry: an English verb's forms plus its translation aids.
///
/// Field order is the serialized key order of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbRecord {
    pub id: String,
    #[serde(default)]
    pub spanish: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub infinitive: String,
    #[serde(default)]
    pub past: String,
    #[serde(default)]
    pub past_participle: String,
    #[serde(default)]
    pub gerund: String,
    #[serde(default)]
    pub image: String,
}

/// A raw CSV row, cells exactly as read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbRow {
    pub infinitive: String,
    pub spanish: String,
    pub pronunciation: String,
    pub simple_past: String,
    pub past_participle: String,
    pub gerund: String,
    pub image_url: String,
}

/// Outcome of a normalizer run
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeReport {
    pub records: usize,
    pub output: PathBuf,
}

/// Outcome of a materializer run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterializeReport {
    pub processed: usize,
    /// Ids with no raw image, in dataset order
    pub missing: Vec<String>,
}

impl MaterializeReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
