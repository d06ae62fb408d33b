use std::fmt::{Debug, Display};

/// The single error type of the crate. Carries a human-readable message that is
/// shown to the user as-is, next to the path of the file that caused it, which
/// is why `sweep_err!` does not append the source location of the error.
pub struct SweepError(pub String);

impl Display for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SweepError").field(&self.0).finish()
    }
}

impl std::error::Error for SweepError {}

#[macro_export]
macro_rules! sweep_err {
    ($($arg:tt)*) => {
        $crate::error::SweepError(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! sweep_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::sweep_err!("{}", err));
            }
        }
    };
}
