use clap::{Parser, Subcommand};

mod commands;

use commands::{build, configure, convert, exec, run};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "raybuild")]
#[command(version = VERSION)]
#[command(about = "Build a raytracer project, run it, and convert the render")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full configure, build, execute, convert pipeline (the default)
    Run(run::RunArgs),
    /// Run the build system configure step
    Configure(configure::ConfigureArgs),
    /// Compile the project in the release configuration
    Build(build::BuildArgs),
    /// Run the built executable in the release directory
    Exec(exec::ExecArgs),
    /// Convert a render into a JPEG
    Convert(convert::ConvertArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => run::run(run::RunArgs::default()),
        Some(Commands::Run(args)) => run::run(args),
        Some(Commands::Configure(args)) => configure::run(args),
        Some(Commands::Build(args)) => build::run(args),
        Some(Commands::Exec(args)) => exec::run(args),
        Some(Commands::Convert(args)) => convert::run(args),
    };

    match result {
        Ok(code) => std::process::ExitCode::from(exit_code_to_u8(code)),
        Err(e) => {
            eprintln!("{} ({})", e, e.code());
            std::process::ExitCode::from(1)
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
