// picresize/src/prompt.rs
use crate::core::{BatchJob, ImageToolError, Resolution, Result, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Asks for whatever the command line left out.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `question` and returns the trimmed answer. EOF reads as empty.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    pub fn source_dir(&mut self) -> Result<PathBuf> {
        Ok(PathBuf::from(self.ask("Enter the source folder containing images: ")?))
    }

    pub fn dimension(&mut self, label: &str, default: u32) -> Result<u32> {
        let answer = self.ask(&format!("Enter target {} (e.g. {}): ", label, default))?;
        parse_dimension(&answer, default)
    }

    /// Builds the job, prompting only for values not already supplied.
    pub fn batch_job(
        &mut self,
        input: Option<&Path>,
        output_dir: &Path,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<BatchJob> {
        let source_dir = match input {
            Some(path) => path.to_path_buf(),
            None => self.source_dir()?,
        };
        let width = match width {
            Some(width) => width,
            None => self.dimension("width", DEFAULT_WIDTH)?,
        };
        let height = match height {
            Some(height) => height,
            None => self.dimension("height", DEFAULT_HEIGHT)?,
        };

        Ok(BatchJob::new(source_dir, Resolution::new(width, height)?).with_output_dir(output_dir))
    }
}

/// Empty input selects `default`; anything else must be a positive integer.
pub fn parse_dimension(input: &str, default: u32) -> Result<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    match input.parse::<u32>() {
        Ok(0) | Err(_) => Err(ImageToolError::InvalidParameter(format!(
            "'{}' is not a positive integer",
            input
        ))),
        Ok(value) => Ok(value),
    }
}
