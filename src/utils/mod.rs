// picresize/src/utils/mod.rs
use crate::core::OUTPUT_PREFIX;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".bmp", ".gif"];

/// Case-insensitive match of the file name's ending against the recognized
/// image extensions.
pub fn is_supported_format(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy().to_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        })
        .unwrap_or(false)
}

/// `photo.jpg` -> `resized_photo.jpg`
pub fn output_file_name(file_name: &OsStr) -> OsString {
    let mut name = OsString::from(OUTPUT_PREFIX);
    name.push(file_name);
    name
}

/// Destination for `input` inside `output_dir`, or next to the input when no
/// directory is given.
pub fn generate_output_path(input: &Path, output_dir: Option<&Path>) -> Option<PathBuf> {
    let file_name = output_file_name(input.file_name()?);
    Some(match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    })
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.ln() / base.ln()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}
