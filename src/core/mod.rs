// picresize/src/core/mod.rs
pub mod processor;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 360;
pub const DEFAULT_QUALITY: u8 = 95;
pub const MAX_DIMENSION: u32 = 100_000;
/// 100 megapixels, about 400 MB as RGBA8.
pub const MAX_PIXELS: u64 = 100_000_000;
pub const OUTPUT_PREFIX: &str = "resized_";
pub const DEFAULT_OUTPUT_DIR: &str = "/storage/emulated/0/picture";

/// Target pixel dimensions. Both sides are in `1..=MAX_DIMENSION` and the
/// area never exceeds `MAX_PIXELS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ImageToolError::InvalidParameter(format!(
                "Resolution must be positive, got {}x{}",
                width, height
            )));
        }

        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ImageToolError::InvalidParameter(
                "Dimensions too large (max 100,000 pixels)".to_string(),
            ));
        }

        if u64::from(width) * u64::from(height) > MAX_PIXELS {
            return Err(ImageToolError::InvalidParameter(format!(
                "Resolution {}x{} exceeds {} pixels",
                width, height, MAX_PIXELS
            )));
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One file's worth of work: read `source`, write `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub resolution: Resolution,
}

impl ResizeRequest {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        resolution: Resolution,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            resolution,
        }
    }
}

/// Parameters of one directory-wide run. Built once, never mutated while the
/// batch iterates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub resolution: Resolution,
}

impl BatchJob {
    pub fn new(source_dir: impl Into<PathBuf>, resolution: Resolution) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            resolution,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

/// What a successful single-image resize produced.
#[derive(Debug, Clone)]
pub struct ResizeOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub original_dimensions: (u32, u32),
    pub resolution: Resolution,
    pub source_bytes: u64,
    pub bytes_written: u64,
}

#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub processed_count: usize,
    pub total_size_before: u64,
    pub total_size_after: u64,
    pub errors: Vec<(PathBuf, String)>,
}

impl ProcessingStats {
    pub fn failed_count(&self) -> usize {
        self.errors.len()
    }
}

#[derive(Error, Debug)]
pub enum ImageToolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Input image not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to process {}: {message}", path.display())]
    Processing { path: PathBuf, message: String },

    #[error("Batch processing failed: {0}")]
    Batch(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ImageToolError {
    pub fn processing(path: &Path, message: impl Into<String>) -> Self {
        Self::Processing {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageToolError>;
