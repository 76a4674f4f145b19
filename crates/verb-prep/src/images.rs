//! The image materializer job: raw images in, resized web images out

use crate::constants::{RAW_EXTENSIONS, WEBP_METHOD};
use crate::dataset::{load_dataset, save_dataset};
use crate::options::{ImageFormat, MaterializeOptions};
use crate::types::*;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// First existing `<dir>/<id>.<ext>`, trying `RAW_EXTENSIONS` in order
pub async fn find_raw_image(dir: impl AsRef<Path>, id: &str) -> Option<PathBuf> {
    for ext in RAW_EXTENSIONS {
        let path = dir.as_ref().join(format!("{id}.{ext}"));
        if let Ok(metadata) = tokio::fs::metadata(&path).await {
            if metadata.is_file() {
                return Some(path);
            }
        }
    }
    None
}

/// Scale down to `target_width`, keeping the aspect ratio.
///
/// Images already narrow enough are returned untouched.
pub fn resize_keep_aspect(img: RgbImage, target_width: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    if width <= target_width {
        return img;
    }
    let target_height = (u64::from(height) * u64::from(target_width) / u64::from(width)).max(1);
    image::imageops::resize(
        &img,
        target_width,
        target_height as u32,
        FilterType::Lanczos3,
    )
}

/// Encode an RGB image at the given lossy quality
pub fn encode_rgb(img: &RgbImage, format: ImageFormat, quality: u8) -> Result<Vec<u8>> {
    match format {
        ImageFormat::WebP => {
            let mut config = webp::WebPConfig::new()
                .map_err(|_| PrepError::Encode("Invalid WebP configuration".to_string()))?;
            config.lossless = 0;
            config.quality = f32::from(quality);
            config.method = WEBP_METHOD;

            let encoder = webp::Encoder::from_rgb(img.as_raw(), img.width(), img.height());
            let memory = encoder
                .encode_advanced(&config)
                .map_err(|e| PrepError::Encode(format!("WebP encoding failed: {:?}", e)))?;
            Ok(memory.to_vec())
        }
        ImageFormat::Jpeg => {
            let mut bytes = Vec::new();
            let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
            encoder.encode_image(img)?;
            Ok(bytes)
        }
    }
}

/// Decode `raw`, convert to RGB, resize and write the encoded result to `out`
pub async fn materialize_image(
    raw: impl AsRef<Path>,
    out: impl AsRef<Path>,
    options: &MaterializeOptions,
) -> Result<()> {
    let bytes = tokio::fs::read(raw.as_ref()).await?;
    let target_width = options.target_width;
    let format = options.format;
    let quality = options.quality;

    let encoded = tokio::task::spawn_blocking(move || {
        let img = image::load_from_memory(&bytes)?.to_rgb8();
        let img = resize_keep_aspect(img, target_width);
        encode_rgb(&img, format, quality)
    })
    .await??;

    tokio::fs::write(out.as_ref(), encoded).await?;
    Ok(())
}

/// Materialize an image for every record that has a raw source and point
/// its `image` field at the result.
///
/// Records without a raw image are left as they are and reported in
/// [`MaterializeReport::missing`]. The dataset is rewritten in full at the
/// end, including untouched records.
pub async fn run_materializer(options: &MaterializeOptions) -> Result<MaterializeReport> {
    options.validate()?;
    tokio::fs::create_dir_all(&options.output_image_dir).await?;

    let mut records = load_dataset(&options.dataset).await?;
    let mut report = MaterializeReport::default();

    for record in &mut records {
        let Some(raw) = find_raw_image(&options.raw_image_dir, &record.id).await else {
            log::warn!("No raw image for '{}'", record.id);
            report.missing.push(record.id.clone());
            continue;
        };

        let out = options.output_path(&record.id);
        log::debug!("{} → {}", raw.display(), out.display());
        materialize_image(&raw, &out, options).await?;

        record.image = options.public_path(&record.id);
        report.processed += 1;
    }

    save_dataset(&records, &options.dataset).await?;

    log::info!(
        "Materialized {} images, {} missing",
        report.processed,
        report.missing.len()
    );
    Ok(report)
}
