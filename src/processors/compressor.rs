// picresize/src/processors/compressor.rs
use crate::core::{ImageToolError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encodes images by destination extension. The quality setting only applies
/// to JPEG; lossless formats ignore it.
pub struct Compressor {
    quality: u8,
}

impl Compressor {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Writes `image` to `path` and returns the encoded size in bytes.
    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<u64> {
        let format = self.detect_format(path)?;
        self.save_with_format(image, path, format)
    }

    pub fn save_with_format(
        &self,
        image: &DynamicImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<u64> {
        log::debug!(
            "Saving image to {} with format {:?}, quality: {}",
            path.display(),
            format,
            self.quality
        );

        match format {
            ImageFormat::Jpeg => self.save_jpeg(image, path)?,
            _ => self.save_generic(image, path, format)?,
        }

        let file_size = std::fs::metadata(path)?.len();
        log::info!("Saved image: {} ({} bytes)", path.display(), file_size);
        Ok(file_size)
    }

    fn save_jpeg(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        // JPEG has no alpha channel and no 16-bit samples.
        let image = match image.color() {
            ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
            _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        };

        let mut writer = BufWriter::new(File::create(path)?);
        let encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);
        image.write_with_encoder(encoder)?;
        writer.flush()?;
        Ok(())
    }

    fn save_generic(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
        let image = match (format, image.color()) {
            (ImageFormat::Png, _) | (ImageFormat::Gif, ColorType::Rgba8) => Cow::Borrowed(image),
            (ImageFormat::Gif, _) => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
            (_, ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8) => {
                Cow::Borrowed(image)
            }
            _ => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        };

        let mut writer = BufWriter::new(File::create(path)?);
        image.write_to(&mut writer, format)?;
        writer.flush()?;
        Ok(())
    }

    fn detect_format(&self, path: &Path) -> Result<ImageFormat> {
        ImageFormat::from_path(path).map_err(|_| {
            ImageToolError::processing(
                path,
                "Cannot determine output format from file extension",
            )
        })
    }
}
