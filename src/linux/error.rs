pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("fork: {0}")]
    Fork(#[source] nix::Error),

    #[error("exec {program:?}: {error}")]
    Exec {
        program: std::ffi::OsString,
        #[source]
        error: nix::Error,
    },

    #[error("waitpid: {0}")]
    Wait(#[source] nix::Error),

    #[error("cannot install handler for {signal:?}: {error}")]
    Signal {
        signal: nix::sys::signal::Signal,
        #[source]
        error: nix::Error,
    },

    #[error("argument contains an interior nul byte")]
    NulInArgument(#[from] std::ffi::NulError),
}
