use std::process::ExitCode;

use super::run::RunResult;

/// Exit status of a run.
///
/// - `Success` (0): run completed; per-file failures are reported, not fatal
/// - `Failure` (1): `--check` found placeholders that need rewriting
/// - `Error` (2): run aborted (unreadable source root, invalid config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &RunResult) -> Self {
        if result.check && result.summary.files_changed > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
