// picresize/src/processors/batch.rs
use crate::core::processor::ImageProcessor;
use crate::core::{BatchJob, ImageToolError, ProcessingStats, ResizeOutcome, ResizeRequest, Result};
use crate::utils::{is_supported_format, output_file_name};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily lists the image files directly inside a directory. Call
/// [`CandidateFiles::new`] again for a fresh pass.
pub struct CandidateFiles {
    root: PathBuf,
    entries: walkdir::IntoIter,
}

impl CandidateFiles {
    pub fn new(dir: &Path) -> Self {
        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter();

        Self {
            root: dir.to_path_buf(),
            entries,
        }
    }
}

impl Iterator for CandidateFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                // Failing to read the directory itself ends the batch.
                Err(e) if e.depth() == 0 => {
                    return Some(Err(ImageToolError::Batch(format!(
                        "Cannot read {}: {}",
                        self.root.display(),
                        e
                    ))));
                }
                // A matching name whose target cannot be read (e.g. a dangling
                // symlink) is still a candidate, reported per file.
                Err(e) => match e.path() {
                    Some(path) if is_supported_format(path) => {
                        return Some(Ok(path.to_path_buf()));
                    }
                    _ => {
                        log::warn!("Skipping unreadable entry in {}: {}", self.root.display(), e);
                        continue;
                    }
                },
            };

            if entry.file_type().is_file() && is_supported_format(entry.path()) {
                return Some(Ok(entry.into_path()));
            }

            log::debug!("Skipping {}", entry.path().display());
        }
    }
}

/// Result of one file within a batch, handed to the observer as it happens.
#[derive(Debug)]
pub struct FileOutcome<'a> {
    pub request: &'a ResizeRequest,
    pub result: &'a Result<ResizeOutcome>,
}

pub struct BatchProcessor {
    processor: ImageProcessor,
}

impl BatchProcessor {
    pub fn new() -> Self {
        Self {
            processor: ImageProcessor::new(),
        }
    }

    pub fn run(&self, job: &BatchJob) -> Result<ProcessingStats> {
        self.run_with(job, |_| {})
    }

    /// Resizes every candidate in `job.source_dir` sequentially. Per-file
    /// failures are recorded in the returned stats; only directory-level
    /// failures come back as `Err`.
    pub fn run_with<F>(&self, job: &BatchJob, mut observer: F) -> Result<ProcessingStats>
    where
        F: FnMut(FileOutcome<'_>),
    {
        self.validate_source(&job.source_dir)?;

        log::info!(
            "Resizing images from {} into {} at {}",
            job.source_dir.display(),
            job.output_dir.display(),
            job.resolution
        );

        let mut stats = ProcessingStats::default();

        for candidate in CandidateFiles::new(&job.source_dir) {
            let source = candidate?;
            let Some(request) = Self::request_for(job, source) else {
                continue;
            };

            let result = self.processor.process(&request);
            match &result {
                Ok(outcome) => {
                    stats.processed_count += 1;
                    stats.total_size_before += outcome.source_bytes;
                    stats.total_size_after += outcome.bytes_written;
                }
                Err(e) => {
                    log::warn!("{}", e);
                    stats.errors.push((request.source.clone(), e.to_string()));
                }
            }

            observer(FileOutcome {
                request: &request,
                result: &result,
            });
        }

        if stats.processed_count == 0 && stats.errors.is_empty() {
            log::warn!("No image files found in {}", job.source_dir.display());
        }

        Ok(stats)
    }

    fn request_for(job: &BatchJob, source: PathBuf) -> Option<ResizeRequest> {
        let destination = job.output_dir.join(output_file_name(source.file_name()?));
        Some(ResizeRequest::new(source, destination, job.resolution))
    }

    pub fn validate_source(&self, source_dir: &Path) -> Result<()> {
        let metadata = match std::fs::metadata(source_dir) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ImageToolError::DirectoryNotFound(source_dir.to_path_buf()));
            }
            Err(e) => {
                return Err(ImageToolError::Batch(format!(
                    "Cannot access {}: {}",
                    source_dir.display(),
                    e
                )));
            }
        };

        if !metadata.is_dir() {
            return Err(ImageToolError::NotADirectory(source_dir.to_path_buf()));
        }

        Ok(())
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Resolution;
    use tempfile::tempdir;

    fn names(paths: impl Iterator<Item = Result<PathBuf>>) -> Vec<String> {
        let mut names: Vec<String> = paths
            .map(|p| p.unwrap().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn candidates_are_filtered_and_not_recursive() {
        let dir = tempdir().unwrap();
        for name in ["a.png", "B.JPG", "notes.txt", "c.gif"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("folder.png")).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/inner.png"), b"x").unwrap();

        assert_eq!(
            names(CandidateFiles::new(dir.path())),
            vec!["B.JPG", "a.png", "c.gif"]
        );
    }

    #[test]
    fn candidates_can_be_listed_twice() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.bmp"), b"x").unwrap();

        assert_eq!(names(CandidateFiles::new(dir.path())), vec!["a.bmp"]);
        assert_eq!(names(CandidateFiles::new(dir.path())), vec!["a.bmp"]);
    }

    #[test]
    fn unreadable_root_is_a_batch_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        let first = CandidateFiles::new(&missing).next();
        assert!(matches!(first, Some(Err(ImageToolError::Batch(_)))));
    }

    #[test]
    fn missing_source_dir_halts_before_any_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");
        let job = BatchJob::new(dir.path().join("nope"), Resolution::default())
            .with_output_dir(&output);

        let err = BatchProcessor::new().run(&job).unwrap_err();
        assert!(matches!(err, ImageToolError::DirectoryNotFound(_)));
        assert!(!output.exists());
    }

    #[test]
    fn file_as_source_dir_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.png");
        std::fs::write(&file, b"x").unwrap();
        let job = BatchJob::new(&file, Resolution::default()).with_output_dir(dir.path());

        let err = BatchProcessor::new().run(&job).unwrap_err();
        assert!(matches!(err, ImageToolError::NotADirectory(_)));
    }

    #[test]
    fn unreachable_source_dir_is_a_batch_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, b"x").unwrap();
        let job = BatchJob::new(file.join("photos"), Resolution::default())
            .with_output_dir(dir.path().join("out"));

        let err = BatchProcessor::new().run(&job).unwrap_err();
        assert!(matches!(err, ImageToolError::Batch(_)), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_reported_as_not_found() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        std::fs::create_dir(&input).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.jpg"), input.join("x.jpg")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.txt"), input.join("y.txt")).unwrap();

        let job = BatchJob::new(&input, Resolution::default())
            .with_output_dir(dir.path().join("out"));
        let mut calls = 0;
        let stats = BatchProcessor::new()
            .run_with(&job, |outcome| {
                calls += 1;
                assert!(matches!(outcome.result, Err(ImageToolError::InputNotFound(_))));
            })
            .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(stats.processed_count, 0);
        assert_eq!(stats.failed_count(), 1);
        assert_eq!(stats.errors[0].0, input.join("x.jpg"));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn observer_sees_every_candidate() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        std::fs::create_dir(&input).unwrap();
        image::RgbImage::new(30, 30).save(input.join("ok.png")).unwrap();
        std::fs::write(input.join("broken.jpg"), b"not an image").unwrap();

        let job = BatchJob::new(&input, Resolution::new(10, 5).unwrap())
            .with_output_dir(dir.path().join("out"));

        let mut seen = Vec::new();
        let stats = BatchProcessor::new()
            .run_with(&job, |outcome| {
                seen.push((outcome.request.destination.clone(), outcome.result.is_ok()));
            })
            .unwrap();
        seen.sort();

        assert_eq!(stats.processed_count, 1);
        assert_eq!(stats.failed_count(), 1);
        assert_eq!(stats.errors[0].0, input.join("broken.jpg"));
        assert_eq!(
            stats.total_size_before,
            std::fs::metadata(input.join("ok.png")).unwrap().len()
        );
        assert_eq!(
            stats.total_size_after,
            std::fs::metadata(dir.path().join("out/resized_ok.png")).unwrap().len()
        );
        assert_eq!(
            seen,
            vec![
                (dir.path().join("out/resized_broken.jpg"), false),
                (dir.path().join("out/resized_ok.png"), true),
            ]
        );
    }
}
