#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ProcessStatus {
    /// The process is ready to run
    Ready,

    /// The process is running
    Running,

    /// The process exited normally with the given exit code.
    Exited(u8),

    /// The process was killed by the given signal.
    Signaled(nix::sys::signal::Signal),
}

impl ProcessStatus {
    /// The exit code the supervisor reports for a terminated child.
    ///
    /// Normal exits pass through unchanged, a signal `S` becomes `128 + S`.
    /// Returns `None` while the child has not terminated.
    pub fn exit_code(&self) -> Option<i32> {
        match *self {
            ProcessStatus::Exited(code) => Some(code as i32),
            ProcessStatus::Signaled(signal) => Some(128 + signal as i32),
            ProcessStatus::Ready | ProcessStatus::Running => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::sys::signal::Signal;

    #[test]
    fn exit_codes_pass_through() {
        for &code in &[0u8, 1, 42, 255] {
            assert_eq!(ProcessStatus::Exited(code).exit_code(), Some(code as i32));
        }
    }

    #[test]
    fn signals_map_above_128() {
        assert_eq!(ProcessStatus::Signaled(Signal::SIGINT).exit_code(), Some(130));
        assert_eq!(ProcessStatus::Signaled(Signal::SIGKILL).exit_code(), Some(137));
        assert_eq!(ProcessStatus::Signaled(Signal::SIGTERM).exit_code(), Some(143));
    }

    #[test]
    fn live_process_has_no_exit_code() {
        assert_eq!(ProcessStatus::Ready.exit_code(), None);
        assert_eq!(ProcessStatus::Running.exit_code(), None);
    }
}
