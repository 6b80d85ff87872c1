use super::error::{Error, Result};
use log::debug;
use nix::sys::signal::{kill, sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::unistd::Pid;
use std::sync::atomic::{AtomicI32, Ordering};

/// Signals the supervisor intercepts. Each of them is relayed as SIGINT.
pub const RELAYED_SIGNALS: [Signal; 2] = [Signal::SIGINT, Signal::SIGTERM];

const NO_CHILD: libc::pid_t = 0;

// Written once after fork, read from the signal handler.
static CHILD_PID: AtomicI32 = AtomicI32::new(NO_CHILD);

pub fn set_child(pid: Pid) {
    CHILD_PID.store(pid.as_raw(), Ordering::SeqCst);
}

pub fn child() -> Option<Pid> {
    target(CHILD_PID.load(Ordering::SeqCst))
}

// kill(2) treats 0 and negative ids as process groups, never relay to those.
fn target(raw: libc::pid_t) -> Option<Pid> {
    if raw > 0 {
        Some(Pid::from_raw(raw))
    } else {
        None
    }
}

// Runs in signal context: only an atomic load and kill(2) are allowed here.
extern "C" fn relay(_: libc::c_int) {
    if let Some(pid) = child() {
        let _ = kill(pid, Signal::SIGINT);
    }
}

/// Installs the relay for SIGINT and SIGTERM.
///
/// Handlers are installed with `SA_RESTART`, so a blocked `waitpid` resumes
/// after the relay returns.
pub fn install_relay() -> Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(relay),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );

    for &signal in RELAYED_SIGNALS.iter() {
        unsafe { sigaction(signal, &action) }.map_err(|error| Error::Signal { signal, error })?;
        debug!("relaying {:?} to child as SIGINT", signal);
    }

    Ok(())
}
