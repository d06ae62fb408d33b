use std::path::Path;

use image::ImageReader;

use crate::{error::SweepError, image::Image, sweep_try};

/// Guesses the format based on file contents, decodes and converts to RGBA8.
pub fn decode(path: &Path) -> Result<Image, SweepError> {
    let decoder = sweep_try!(sweep_try!(ImageReader::open(path)).with_guessed_format());
    let pixels = sweep_try!(decoder.decode()).into_rgba8();
    Ok(Image {
        path: path.to_path_buf(),
        pixels,
    })
}
