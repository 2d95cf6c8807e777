//! CLI argument definitions using Clap v4

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// textstrip - render one line of text into a cropped image
#[derive(Parser, Debug)]
#[command(name = "textstrip")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render text to an image file
    #[command(alias = "r")]
    Render(RenderArgs),

    /// Display information about a font file
    #[command(alias = "i")]
    Info(InfoArgs),
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Font file path (.ttf, .otf, .ttc)
    #[arg(short = 'f', long = "font-file")]
    pub font_file: PathBuf,

    /// Face index for TTC/OTC collections
    #[arg(short = 'y', long = "face-index", default_value = "0")]
    pub face_index: u32,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Input text to render (reads from stdin if omitted)
    pub text: Option<String>,

    /// Font file path (.ttf, .otf, .ttc)
    #[arg(short = 'f', long = "font-file")]
    pub font_file: PathBuf,

    /// Input text (alternative to positional argument)
    #[arg(short = 't', long = "text", conflicts_with = "text_file")]
    pub text_arg: Option<String>,

    /// Read input text from file
    #[arg(short = 'T', long = "text-file", conflicts_with = "text_arg")]
    pub text_file: Option<PathBuf>,

    /// Font size in pixels per em
    #[arg(short = 's', long = "font-size", default_value = "32", allow_negative_numbers = true)]
    pub font_size: i32,

    /// Disable pair kerning
    #[arg(long = "no-kerning", action = ArgAction::SetTrue)]
    pub no_kerning: bool,

    /// Text color (RRGGBB or RRGGBBAA); PNG only
    #[arg(short = 'c', long = "foreground", default_value = "000000FF")]
    pub foreground: String,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'O', long = "format", default_value = "png")]
    pub format: OutputFormat,

    /// Silent mode (no progress info)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// RGBA PNG, ink tinted with the foreground color
    Png,
    /// 8-bit ASCII graymap of the coverage
    Pgm,
}

impl From<OutputFormat> for textstrip_export::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => Self::Png,
            OutputFormat::Pgm => Self::Pgm,
        }
    }
}
