//! Fixed project conventions and encoder defaults

// =============================================================================
// Project Layout
// =============================================================================

/// Source CSV, relative to the project root
pub const INPUT_CSV: &str = "data/verbs_short.csv";

/// Generated dataset, relative to the project root
pub const DATASET_JSON: &str = "public/verbs.json";

/// Raw source images, relative to the project root
pub const RAW_IMAGE_DIR: &str = "data/images_raw";

/// Materialized images, relative to the project root
pub const OUTPUT_IMAGE_DIR: &str = "public/images/verbs";

/// URL prefix the app uses to reach `OUTPUT_IMAGE_DIR`
pub const PUBLIC_IMAGE_PREFIX: &str = "/images/verbs";

// =============================================================================
// Image Encoding
// =============================================================================

/// Maximum output width in pixels
pub const TARGET_WIDTH: u32 = 640;

/// Lossy quality, 1..=100
pub const IMAGE_QUALITY: u8 = 65;

/// libwebp compression effort, 0 (fast) ..= 6 (smallest output)
pub const WEBP_METHOD: i32 = 6;

/// Raw image extensions, in lookup order
pub const RAW_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

// =============================================================================
// CSV Columns
// =============================================================================

/// Header columns the normalizer cannot run without
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "infinitive",
    "spanish",
    "pronunciation",
    "simple_past",
    "past_participle",
    "gerund",
    "image_url",
];
