// picresize/src/cli.rs
use crate::core::DEFAULT_OUTPUT_DIR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "picresize", version, about = "Resize every image in a folder to one resolution")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source folder; prompted for when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Folder that receives the resized_* files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Target width in pixels; prompted for when omitted
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Target height in pixels; prompted for when omitted
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resize a single image
    Resize {
        /// Image to resize
        input: PathBuf,

        /// Output file; defaults to resized_<name> next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short = 'W', long, default_value_t = crate::core::DEFAULT_WIDTH)]
        width: u32,

        #[arg(short = 'H', long, default_value_t = crate::core::DEFAULT_HEIGHT)]
        height: u32,
    },
}
