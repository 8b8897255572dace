use clap::Args;
use raybuild::{Pipeline, Step};

use crate::commands::{print_step, CmdResult, ProjectArgs};

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: BuildArgs) -> CmdResult {
    let pipeline = Pipeline::new(args.project.to_config());
    let report = pipeline.run_step(Step::Build)?;
    print_step(&report);
    Ok(report.output.exit_code)
}
