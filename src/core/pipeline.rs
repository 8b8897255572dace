//! Build-and-render pipeline orchestration.
//!
//! Three process steps (configure, compile, execute) followed by one image
//! conversion. Step failures are captured and reported, never fatal: a broken
//! configure still falls through to the build and run attempts, and only the
//! conversion can halt the pipeline. Callers that want a halt-on-failure
//! policy can inspect each [`StepReport`] and stop themselves.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::convert;
use crate::defaults;
use crate::error::{Error, Result};
use crate::utils::command::{self, CommandOutput};
use crate::utils::io;

/// Paths and program names driving one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Project root containing the build system's top-level manifest.
    pub project_dir: PathBuf,
    /// Build system program for the configure and compile steps.
    pub build_tool: String,
    /// Executable to run inside the release directory.
    pub executable: String,
    /// File name the executable writes into the release directory.
    pub render_output: String,
    /// Converted image file name, resolved against the project root.
    pub converted_output: String,
}

impl PipelineConfig {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            build_tool: defaults::BUILD_TOOL.to_string(),
            executable: defaults::executable().to_string(),
            render_output: defaults::RENDER_OUTPUT.to_string(),
            converted_output: defaults::CONVERTED_OUTPUT.to_string(),
        }
    }

    pub fn build_dir(&self) -> PathBuf {
        self.project_dir.join(defaults::BUILD_DIR)
    }

    pub fn release_dir(&self) -> PathBuf {
        self.build_dir().join(defaults::RELEASE_SUBDIR)
    }

    pub fn render_output_path(&self) -> PathBuf {
        self.release_dir().join(&self.render_output)
    }

    pub fn converted_output_path(&self) -> PathBuf {
        self.project_dir.join(&self.converted_output)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Configure,
    Build,
    Execute,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Configure, Step::Build, Step::Execute];

    /// Label prefixed to this step's captured output lines.
    pub fn label(&self) -> &'static str {
        match self {
            Step::Configure => "Configure",
            Step::Build => "Build",
            Step::Execute => "Run",
        }
    }
}

/// Outcome of a single process step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: Step,
    pub command: String,
    #[serde(flatten)]
    pub output: CommandOutput,
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub steps: Vec<StepReport>,
    pub image: PathBuf,
}

pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run a single pipeline stage, returning its captured outcome.
    ///
    /// The working directory is created first when absent. Only that
    /// directory creation can error; the child process outcome, including
    /// a missing tool or a non-zero exit, always comes back as a report.
    pub fn run_step(&self, step: Step) -> Result<StepReport> {
        let program = self.program_for(step)?;
        match step {
            Step::Configure => {
                let build_dir = self.config.build_dir();
                io::ensure_dir(&build_dir)?;
                Ok(self.invoke(step, program, &[".."], &build_dir))
            }
            Step::Build => {
                let build_dir = self.config.build_dir();
                io::ensure_dir(&build_dir)?;
                Ok(self.invoke(
                    step,
                    program,
                    &["--build", ".", "--config", "Release"],
                    &build_dir,
                ))
            }
            Step::Execute => {
                let release_dir = self.config.release_dir();
                io::ensure_dir(&release_dir)?;
                Ok(self.invoke(step, program, &[], &release_dir))
            }
        }
    }

    fn program_for(&self, step: Step) -> Result<&str> {
        let program = match step {
            Step::Configure | Step::Build => &self.config.build_tool,
            Step::Execute => &self.config.executable,
        };

        if program.trim().is_empty() {
            return Err(Error::Config(format!(
                "{} step has no program configured",
                step.label()
            )));
        }

        Ok(program)
    }

    fn invoke(&self, step: Step, program: &str, args: &[&str], dir: &Path) -> StepReport {
        StepReport {
            step,
            command: command::render_command(program, args),
            output: command::run_in_dir(program, args, Some(dir)),
        }
    }

    /// Convert the render into the configured output image.
    ///
    /// The only fatal stage: a missing or unreadable render stops the
    /// pipeline. Returns the converted path on success.
    pub fn convert(&self) -> Result<PathBuf> {
        let input = self.config.render_output_path();
        let output = self.config.converted_output_path();
        convert::ppm_to_jpeg(&input, &output)?;
        Ok(output)
    }

    /// Run every stage in order, then convert the render.
    pub fn run(&self) -> Result<PipelineReport> {
        let mut steps = Vec::with_capacity(Step::ALL.len());
        for step in Step::ALL {
            steps.push(self.run_step(step)?);
        }

        let image = self.convert()?;
        Ok(PipelineReport { steps, image })
    }
}
