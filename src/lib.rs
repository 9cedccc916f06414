mod cli;
mod core;
mod processors;
mod prompt;
mod utils;

pub use crate::cli::{Cli, Commands};
pub use crate::core::processor::ImageProcessor;
pub use crate::core::{
    BatchJob, ImageToolError, ProcessingStats, ResizeOutcome, ResizeRequest, Resolution, Result,
    DEFAULT_HEIGHT, DEFAULT_OUTPUT_DIR, DEFAULT_QUALITY, DEFAULT_WIDTH, MAX_PIXELS, OUTPUT_PREFIX,
};
pub use crate::processors::{BatchProcessor, CandidateFiles, Compressor, FileOutcome, Loader, Resizer};
pub use crate::prompt::{parse_dimension, Prompter};
pub use crate::utils::{
    format_file_size, generate_output_path, is_supported_format, output_file_name,
    SUPPORTED_EXTENSIONS,
};
