pub mod remove_white;
pub mod trim;

use std::fmt::Display;

use strum::IntoStaticStr;

use crate::{error::SweepError, image::Image};

pub use remove_white::RemoveWhiteSettings;
pub use trim::TrimSettings;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    Trim(TrimSettings),
    RemoveWhite(RemoveWhiteSettings),
}

impl Operation {
    /// Transforms the image in memory. Writing it back is up to the caller,
    /// and only needed when the outcome reports a change.
    pub fn execute(&self, image: &mut Image) -> Result<Outcome, SweepError> {
        match self {
            Operation::Trim(settings) => trim::trim(image, settings),
            Operation::RemoveWhite(settings) => remove_white::remove_white(image, settings),
        }
    }

    /// One-line explanation shown before the prompts and in `--help`
    pub fn description(&self) -> &'static str {
        match self {
            Operation::Trim(_) => {
                "Crops every PNG image to its content, removing transparent or white borders."
            }
            Operation::RemoveWhite(_) => {
                "Turns the white background of every PNG image transparent."
            }
        }
    }
}

/// What a transform did to a single image
#[derive(Debug, Copy, Clone, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Cropped {
        before: (u32, u32),
        after: (u32, u32),
    },
    Cleared {
        pixels: u64,
    },
    Unchanged,
    Skipped(SkipReason),
}

impl Outcome {
    /// Whether the image differs from what was loaded and has to be written back
    pub fn is_change(&self) -> bool {
        matches!(self, Outcome::Cropped { .. } | Outcome::Cleared { .. })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    FullyTransparent,
    NoContent,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::FullyTransparent => f.write_str("fully transparent image"),
            SkipReason::NoContent => {
                f.write_str("no content detected (all white or fully transparent)")
            }
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Cropped { before, after } => write!(
                f,
                "{}x{} -> {}x{}",
                before.0, before.1, after.0, after.1
            ),
            Outcome::Cleared { pixels } => write!(f, "{pixels} pixels made transparent"),
            Outcome::Unchanged => Ok(()),
            Outcome::Skipped(reason) => write!(f, "{reason}"),
        }
    }
}
