use clap::Args;
use raybuild::{Pipeline, Step};

use crate::commands::{print_step, CmdResult, ProjectArgs};

#[derive(Args)]
pub struct ConfigureArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: ConfigureArgs) -> CmdResult {
    let pipeline = Pipeline::new(args.project.to_config());
    let report = pipeline.run_step(Step::Configure)?;
    print_step(&report);
    Ok(report.output.exit_code)
}
