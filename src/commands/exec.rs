use clap::Args;
use raybuild::{Pipeline, Step};

use crate::commands::{print_step, CmdResult, ProjectArgs};

#[derive(Args)]
pub struct ExecArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: ExecArgs) -> CmdResult {
    let pipeline = Pipeline::new(args.project.to_config());
    let report = pipeline.run_step(Step::Execute)?;
    print_step(&report);
    Ok(report.output.exit_code)
}
