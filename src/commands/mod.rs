use std::path::PathBuf;

use clap::Args;
use raybuild::{PipelineConfig, StepReport};

pub mod build;
pub mod configure;
pub mod convert;
pub mod exec;
pub mod run;

pub type CmdResult = raybuild::Result<i32>;

/// Shared pipeline location arguments.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root containing the build system manifest
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Build system program for configure and compile steps
    #[arg(long)]
    pub build_tool: Option<String>,

    /// Executable to run inside the release directory
    #[arg(long)]
    pub executable: Option<String>,
}

impl ProjectArgs {
    pub fn to_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::new(&self.project_dir);
        if let Some(tool) = &self.build_tool {
            config.build_tool = tool.clone();
        }
        if let Some(exe) = &self.executable {
            config.executable = exe.clone();
        }
        config
    }
}

impl Default for ProjectArgs {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            build_tool: None,
            executable: None,
        }
    }
}

/// Print a step's captured streams, each line prefixed with the step label.
pub(crate) fn print_step(report: &StepReport) {
    println!("{} output: {}", report.step.label(), report.output.stdout);
    println!("{} error: {}", report.step.label(), report.output.stderr);
}
