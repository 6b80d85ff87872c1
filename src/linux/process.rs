use super::error::{Error, Result};
use super::signal;
use crate::config::Config;
use crate::process::ProcessStatus;
use log::{debug, info, warn};
use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::*;
use std::ffi::{CStr, CString};
use std::os::unix::ffi::OsStrExt;

/// Exit code of a child whose exec failed, as in the shell's "command not found".
pub const EXEC_FAILED: i32 = 127;

#[derive(Debug)]
pub struct LinuxProcess {
    config: Config,

    pid: Option<Pid>,

    status: ProcessStatus,
}

impl LinuxProcess {
    pub fn new(config: Config) -> LinuxProcess {
        LinuxProcess {
            config,
            pid: None,
            status: ProcessStatus::Ready,
        }
    }

    pub fn pid(&self) -> Option<Pid> {
        self.pid
    }

    /// Forks and runs the configured program in the child with an empty environment.
    ///
    /// Returns in the parent only. The child either becomes the program or
    /// reports the exec failure and exits with [`EXEC_FAILED`].
    pub fn start(&mut self) -> Result<()> {
        // Everything the child needs is allocated before fork.
        let path = CString::new(self.config.program().as_bytes())?;
        let cstr_args = self
            .config
            .command
            .iter()
            .map(|arg| CString::new(arg.as_bytes()))
            .collect::<std::result::Result<Vec<CString>, _>>()?;

        unsafe {
            match fork().map_err(Error::Fork)? {
                ForkResult::Parent { child, .. } => {
                    self.pid = Some(child);
                    self.status = ProcessStatus::Running;
                    signal::set_child(child);
                    info!(
                        "spawned {:?} {:?} as pid {}",
                        self.config.program(),
                        self.config.args(),
                        child
                    );
                    Ok(())
                }
                ForkResult::Child => self.child(&path, &cstr_args),
            }
        }
    }

    fn child(&self, path: &CStr, cstr_args: &[CString]) -> ! {
        let no_env: &[&CStr] = &[];
        let error = match execvpe(path, cstr_args, no_env) {
            Ok(never) => match never {},
            Err(error) => error,
        };

        eprintln!(
            "{}",
            Error::Exec {
                program: self.config.program().to_os_string(),
                error,
            }
        );
        unsafe { libc::_exit(EXEC_FAILED) }
    }

    /// Blocks until this process' child terminates and reaps it.
    ///
    /// Interrupted waits are restarted, so a relayed signal never ends the
    /// wait before the child is gone.
    pub fn wait(&mut self) -> Result<ProcessStatus> {
        let pid = match self.pid {
            Some(pid) => pid,
            None => return Ok(self.status),
        };

        loop {
            match waitpid(pid, None) {
                Err(nix::Error::Sys(Errno::EINTR)) => {
                    debug!("waitpid interrupted, restarting");
                }
                Err(error) => return Err(Error::Wait(error)),
                Ok(WaitStatus::Exited(x, exitcode)) => {
                    debug_assert_eq!(x, pid);

                    self.status = ProcessStatus::Exited(exitcode as u8);
                    info!("pid {} exited with {}", pid, exitcode);
                    return Ok(self.status);
                }
                Ok(WaitStatus::Signaled(x, signal, core_dumped)) => {
                    debug_assert_eq!(x, pid);

                    self.status = ProcessStatus::Signaled(signal);
                    info!(
                        "pid {} killed by {:?}{}",
                        pid,
                        signal,
                        if core_dumped { " (core dumped)" } else { "" }
                    );
                    return Ok(self.status);
                }
                // Not requested through WUNTRACED/WCONTINUED, the child is still alive.
                Ok(other) => warn!("ignoring wait status {:?}", other),
            }
        }
    }
}
