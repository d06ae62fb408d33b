//! `pngsweep` is not a library.
//! This interface is unstable and subject to change at any time.
//! It exists so that the `sweep-crop` and `sweep-unwhite` binaries can share code.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod bbox;
pub mod decode;
pub mod encode;
pub mod error;
pub mod help;
pub mod image;
pub mod init;
pub mod operations;
pub mod plan;
pub mod prompt;
pub mod walk;

use std::ffi::OsString;

use args::Invocation;
use error::SweepError;
use operations::Operation;
use prompt::Prompter;

/// Entry point shared by both binaries
pub fn tool_main(bin_name: &str, operation: Operation) {
    let arguments: Vec<_> = std::env::args_os().collect();

    if let Err(e) = real_main(bin_name, operation, arguments) {
        eprintln!("{bin_name}: {e}");
        std::process::exit(1);
    }
}

fn real_main(
    bin_name: &str,
    operation: Operation,
    arguments: Vec<OsString>,
) -> Result<(), SweepError> {
    init::init();
    match args::parse_args(arguments)? {
        Invocation::Help => {
            help::print_help(bin_name, &operation);
            Ok(())
        }
        Invocation::Interactive => {
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            let mut prompter = Prompter::new(stdin, stdout);
            plan::run_session(operation, &plan::default_root(), &mut prompter)?;
            Ok(())
        }
    }
}
