use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use picresize::{
    format_file_size, generate_output_path, BatchProcessor, Cli, Commands, ImageProcessor,
    ImageToolError, Prompter, ResizeOutcome, ResizeRequest, Resolution,
};
use std::path::PathBuf;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match cli.command {
        Some(Commands::Resize {
            input,
            output,
            width,
            height,
        }) => process_resize(input, output, width, height),
        None => process_batch(cli.input, cli.output, cli.width, cli.height),
    }
}

fn process_resize(
    input: PathBuf,
    output: Option<PathBuf>,
    width: u32,
    height: u32,
) -> Result<()> {
    let output_path = match output {
        Some(path) => path,
        None => generate_output_path(&input, None)
            .with_context(|| format!("Invalid input file name: {}", input.display()))?,
    };

    let request = ResizeRequest::new(input, output_path, Resolution::new(width, height)?);

    match ImageProcessor::new().process(&request) {
        Ok(outcome) => println!("{}", success_line(&outcome)),
        Err(e) => println!("{}", error_line(&e)),
    }

    Ok(())
}

fn process_batch(
    input: Option<PathBuf>,
    output: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    let job = prompter
        .batch_job(input.as_deref(), &output, width, height)
        .context("Failed to read batch parameters")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = BatchProcessor::new().run_with(&job, |outcome| {
        pb.inc(1);
        match outcome.result {
            Ok(resized) => pb.println(success_line(resized)),
            Err(e) => pb.println(error_line(e)),
        }
    });

    match result {
        Ok(stats) => {
            pb.finish_and_clear();
            println!(
                "Batch processing complete. Processed {} images ({} -> {}), {} failed, output in: {}",
                stats.processed_count,
                format_file_size(stats.total_size_before),
                format_file_size(stats.total_size_after),
                stats.failed_count(),
                job.output_dir.display()
            );
        }
        Err(e) => {
            pb.finish_and_clear();
            println!("{}", error_line(&e));
        }
    }

    Ok(())
}

fn success_line(outcome: &ResizeOutcome) -> String {
    format!(
        "Resized image saved to: {} ({}, {})",
        outcome.destination.display(),
        outcome.resolution,
        format_file_size(outcome.bytes_written)
    )
}

fn error_line(error: &ImageToolError) -> String {
    format!("Error: {}", error)
}
