use clap::{App, AppSettings, Arg};
use std::ffi::{OsStr, OsString};

pub const USAGE: &str = "usage: sv <program> <args...>";

/// The invocation of a supervisor run: the program to start and its arguments.
///
/// `command[0]` is both the program to look up in `PATH` and the `argv[0]`
/// the child sees.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub command: Vec<OsString>,
}

fn app() -> App<'static, 'static> {
    App::new("sv")
        .about("Runs a program, relays SIGINT/SIGTERM to it as SIGINT and exits with its status.")
        .setting(AppSettings::DisableHelpFlags)
        .setting(AppSettings::DisableVersion)
        .arg(Arg::with_name("command").required(true).multiple(true))
}

impl Config {
    /// Parses a full argument vector, binary name included.
    ///
    /// Everything after the binary name is taken verbatim, a leading `--`
    /// included, so clap only ever reports the missing program.
    pub fn from_args<I, T>(args: I) -> clap::Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() < 2 {
            app().get_matches_from_safe(args.iter())?;
        }

        Ok(Config {
            command: args.into_iter().skip(1).collect(),
        })
    }

    pub fn program(&self) -> &OsStr {
        &self.command[0]
    }

    pub fn args(&self) -> &[OsString] {
        &self.command[1..]
    }
}
