use clap::Args;
use raybuild::log_status;
use raybuild::{Pipeline, Step};

use crate::commands::{print_step, CmdResult, ProjectArgs};

#[derive(Args, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the full pipeline report as JSON instead of labeled text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RunArgs) -> CmdResult {
    let pipeline = Pipeline::new(args.project.to_config());

    if args.json {
        let report = pipeline.run()?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    // Step failures are printed and fallen through; only conversion halts.
    for step in Step::ALL {
        log_status!("pipeline", "Running {} step", step.label());
        let report = pipeline.run_step(step)?;
        print_step(&report);
    }

    let image = pipeline.convert()?;
    println!("Image saved as {}", image.display());
    Ok(0)
}
