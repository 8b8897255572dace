use std::path::PathBuf;

use clap::Args;
use raybuild::convert;

use crate::commands::{CmdResult, ProjectArgs};

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Source render (default: <project>/build/Release/out.ppm)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Destination image (default: <project>/output.jpg)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ConvertArgs) -> CmdResult {
    let config = args.project.to_config();
    let input = args.input.unwrap_or_else(|| config.render_output_path());
    let output = args.output.unwrap_or_else(|| config.converted_output_path());

    convert::ppm_to_jpeg(&input, &output)?;
    println!("Image saved as {}", output.display());
    Ok(0)
}
