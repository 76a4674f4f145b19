mod constants;
mod csv;
pub mod dataset;
pub mod images;
pub mod normalize;
mod normalizer;
mod options;
mod types;

pub use constants::*;
pub use self::csv::load_rows;
pub use dataset::{load_dataset, save_dataset};
pub use images::{find_raw_image, materialize_image, resize_keep_aspect, run_materializer};
pub use normalizer::{normalize_rows, run_normalizer};
pub use options::*;
pub use types::*;
