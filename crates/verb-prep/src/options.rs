use crate::constants::*;
use crate::types::*;
use std::path::PathBuf;

/// Where every input and output lives, relative to a project root
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLayout {
    pub root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn input_csv(&self) -> PathBuf {
        self.root.join(INPUT_CSV)
    }

    pub fn dataset(&self) -> PathBuf {
        self.root.join(DATASET_JSON)
    }

    pub fn raw_image_dir(&self) -> PathBuf {
        self.root.join(RAW_IMAGE_DIR)
    }

    pub fn output_image_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_IMAGE_DIR)
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Encoded format of materialized images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// Lossy WebP
    #[default]
    WebP,
    /// Baseline JPEG
    Jpeg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::WebP => "webp",
            ImageFormat::Jpeg => "jpg",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOptions {
    pub input_csv: PathBuf,
    pub output_json: PathBuf,
}

impl NormalizeOptions {
    pub fn from_layout(layout: &ProjectLayout) -> Self {
        Self {
            input_csv: layout.input_csv(),
            output_json: layout.dataset(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_csv == self.output_json {
            return Err(PrepError::Config(format!(
                "Output would overwrite the input CSV: {}",
                self.input_csv.display()
            )));
        }
        Ok(())
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::from_layout(&ProjectLayout::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterializeOptions {
    /// Dataset read and rewritten in place
    pub dataset: PathBuf,
    pub raw_image_dir: PathBuf,
    pub output_image_dir: PathBuf,
    /// Prefix written into each record's `image` field
    pub public_prefix: String,
    pub target_width: u32,
    pub quality: u8,
    pub format: ImageFormat,
}

impl MaterializeOptions {
    pub fn from_layout(layout: &ProjectLayout) -> Self {
        Self {
            dataset: layout.dataset(),
            raw_image_dir: layout.raw_image_dir(),
            output_image_dir: layout.output_image_dir(),
            public_prefix: PUBLIC_IMAGE_PREFIX.to_string(),
            target_width: TARGET_WIDTH,
            quality: IMAGE_QUALITY,
            format: ImageFormat::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(PrepError::Config(
                "Target width must be greater than 0".to_string(),
            ));
        }
        if !(1..=100).contains(&self.quality) {
            return Err(PrepError::Config(format!(
                "Quality must be between 1 and 100, got {}",
                self.quality
            )));
        }
        Ok(())
    }

    /// Output file for a record id
    pub fn output_path(&self, id: &str) -> PathBuf {
        self.output_image_dir
            .join(format!("{}.{}", id, self.format.extension()))
    }

    /// Value stored in the record's `image` field for a record id
    pub fn public_path(&self, id: &str) -> String {
        let prefix = self.public_prefix.trim_end_matches('/');
        format!("{}/{}.{}", prefix, id, self.format.extension())
    }
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self::from_layout(&ProjectLayout::default())
    }
}
