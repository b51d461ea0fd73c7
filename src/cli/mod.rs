use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{RunResult, run};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;

    let result = run(&args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::from_result(&result))
}
