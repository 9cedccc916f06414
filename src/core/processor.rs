// picresize/src/core/processor.rs
use super::{ImageToolError, ResizeOutcome, ResizeRequest, Result, DEFAULT_QUALITY};
use crate::processors::{Compressor, Loader, Resizer};
use std::path::Path;

/// Resizes one file: load, resample to the exact target, write.
pub struct ImageProcessor {
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
}

impl ImageProcessor {
    pub fn new() -> Self {
        Self {
            loader: Loader::new(),
            resizer: Resizer::new(),
            compressor: Compressor::new(DEFAULT_QUALITY),
        }
    }

    /// Runs one request. A missing source yields `InputNotFound`; every other
    /// failure is reported as `Processing` against the source path.
    pub fn process(&self, request: &ResizeRequest) -> Result<ResizeOutcome> {
        self.process_inner(request).map_err(|e| match e {
            ImageToolError::InputNotFound(_) | ImageToolError::Processing { .. } => e,
            other => ImageToolError::processing(&request.source, other.to_string()),
        })
    }

    fn process_inner(&self, request: &ResizeRequest) -> Result<ResizeOutcome> {
        let source = request.source.as_path();
        let destination = request.destination.as_path();

        let (image, source_bytes) = self.loader.load(source)?;
        let original_dimensions = (image.width(), image.height());

        let resized = self.resizer.resize(&image, request.resolution);
        drop(image);

        Self::ensure_parent_dir(destination)?;
        let bytes_written = self.compressor.save(&resized, destination)?;

        Ok(ResizeOutcome {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            original_dimensions,
            resolution: request.resolution,
            source_bytes,
            bytes_written,
        })
    }

    fn ensure_parent_dir(destination: &Path) -> Result<()> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                log::debug!("Creating output directory: {}", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}
