//! Command-line argument handling.
//!
//! Both tools are interactive, so the only thing accepted on the command line
//! is a request for help. There is no need for an argument parsing library.

use std::ffi::{OsStr, OsString};

use crate::{error::SweepError, sweep_err};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Invocation {
    Interactive,
    Help,
}

pub fn parse_args(args: Vec<OsString>) -> Result<Invocation, SweepError> {
    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    let Some(arg) = iter.next() else {
        return Ok(Invocation::Interactive);
    };
    if !is_help_flag(&arg) {
        return Err(sweep_err!(
            "unrecognized argument `{}'; the folder is asked for interactively",
            arg.to_string_lossy()
        ));
    }
    if let Some(extra) = iter.next() {
        return Err(sweep_err!(
            "unexpected argument `{}'",
            extra.to_string_lossy()
        ));
    }
    Ok(Invocation::Help)
}

fn is_help_flag(arg: &OsStr) -> bool {
    ["--help", "-help", "-h"]
        .iter()
        .any(|flag| arg == OsStr::new(flag))
}
