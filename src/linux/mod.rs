mod error;
mod process;
mod signal;

use crate::config;
use crate::process::ProcessStatus;
use error::Result;
use log::debug;
use process::LinuxProcess;

/// Exit code when the supervisor itself fails: fork or waitpid.
pub const SUPERVISOR_FAILED: i32 = 1;

pub fn run(config: &config::Config) -> ! {
    let exitcode = exit_code(run_impl(config));

    debug!("exiting with {}", exitcode);
    std::process::exit(exitcode)
}

fn run_impl(config: &config::Config) -> Result<ProcessStatus> {
    let mut process = LinuxProcess::new(config.clone());
    process.start()?;

    // The child already runs; without the relay it is still waited for.
    if let Err(err) = signal::install_relay() {
        debug!("{:?}", err);
        eprintln!("{}", err);
    }

    debug!("waiting for pid {:?}", process.pid());
    process.wait()
}

fn exit_code(result: Result<ProcessStatus>) -> i32 {
    match result {
        Ok(status) => status.exit_code().unwrap_or(SUPERVISOR_FAILED),
        Err(err) => {
            debug!("{:?}", err);
            eprintln!("{}", err);
            SUPERVISOR_FAILED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error::Error;
    use nix::errno::Errno;
    use nix::sys::signal::Signal;

    #[test]
    fn wait_failure_exits_as_supervisor_failure() {
        let result = Err(Error::Wait(nix::Error::Sys(Errno::ECHILD)));
        assert_eq!(exit_code(result), SUPERVISOR_FAILED);
    }

    #[test]
    fn fork_failure_exits_as_supervisor_failure() {
        let result = Err(Error::Fork(nix::Error::Sys(Errno::EAGAIN)));
        assert_eq!(exit_code(result), SUPERVISOR_FAILED);
    }

    #[test]
    fn child_status_becomes_exit_code() {
        assert_eq!(exit_code(Ok(ProcessStatus::Exited(42))), 42);
        assert_eq!(exit_code(Ok(ProcessStatus::Signaled(Signal::SIGINT))), 130);
    }
}
