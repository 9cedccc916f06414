// picresize/src/processors/loader.rs
use crate::core::{ImageToolError, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the file at `path`, sniffing the format from its contents.
    /// Also returns the encoded file size.
    pub fn load(&self, path: &Path) -> Result<(DynamicImage, u64)> {
        log::debug!("Loading image from: {}", path.display());

        let file_size = self.validate_path(path)?;

        let image = ImageReader::open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ImageToolError::InputNotFound(path.to_path_buf()),
                _ => ImageToolError::Io(e),
            })?
            .with_guessed_format()?
            .decode()
            .map_err(|e| ImageToolError::processing(path, format!("Failed to decode image: {}", e)))?;

        let (width, height) = image.dimensions();
        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}",
            width,
            height,
            image.color()
        );

        Ok((image, file_size))
    }

    fn validate_path(&self, path: &Path) -> Result<u64> {
        let metadata = match path.metadata() {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ImageToolError::InputNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(ImageToolError::processing(path, "Not a regular file"));
        }
        if metadata.len() == 0 {
            return Err(ImageToolError::processing(path, "File is empty"));
        }

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.png");

        let err = Loader::new().load(&path).unwrap_err();
        assert!(matches!(err, ImageToolError::InputNotFound(p) if p == path));
    }

    #[test]
    fn empty_file_is_a_processing_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();

        let err = Loader::new().load(&path).unwrap_err();
        assert!(matches!(err, ImageToolError::Processing { .. }));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let err = Loader::new().load(&path).unwrap_err();
        assert!(matches!(err, ImageToolError::Processing { .. }));
    }

    #[test]
    fn decodes_png_regardless_of_extension() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("real.png");
        image::RgbImage::new(12, 7).save(&png).unwrap();
        let renamed = dir.path().join("mislabeled.bmp");
        std::fs::rename(&png, &renamed).unwrap();

        let (image, file_size) = Loader::new().load(&renamed).unwrap();
        assert_eq!(image.dimensions(), (12, 7));
        assert_eq!(file_size, std::fs::metadata(&renamed).unwrap().len());
    }
}
