//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Generate Angular component bundles from the frames of a Figma file.
#[derive(Debug, Parser)]
#[command(name = "trellis", version, about)]
pub struct Cli {
    /// Key of the Figma file to generate from.
    pub file_key: String,

    /// Personal access token for the Figma API.
    #[arg(long, env = "FIGMA_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Directory the component bundles are written into.
    #[arg(long, default_value = "generated-angular")]
    pub out: PathBuf,

    /// Override the API base URL.
    #[arg(long, default_value = "https://api.figma.com")]
    pub base_url: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}
