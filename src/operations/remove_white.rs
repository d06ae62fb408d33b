use image::Rgba;

use crate::{error::SweepError, image::Image};

use super::Outcome;

const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RemoveWhiteSettings {
    /// A pixel is background if its red, green and blue are all strictly above this
    pub threshold: u8,
}

impl Default for RemoveWhiteSettings {
    fn default() -> Self {
        Self { threshold: 240 }
    }
}

/// Replaces every near-white pixel with fully transparent white.
/// Other pixels, including their alpha, are left exactly as they were.
pub fn remove_white(
    image: &mut Image,
    settings: &RemoveWhiteSettings,
) -> Result<Outcome, SweepError> {
    let mut changed: u64 = 0;
    for pixel in image.pixels.pixels_mut() {
        if is_background(pixel, settings.threshold) && *pixel != TRANSPARENT_WHITE {
            *pixel = TRANSPARENT_WHITE;
            changed += 1;
        }
    }

    log::debug!("{}: {changed} background pixels", image.path.display());
    if changed == 0 {
        Ok(Outcome::Unchanged)
    } else {
        Ok(Outcome::Cleared { pixels: changed })
    }
}

#[inline]
fn is_background(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    (r > threshold) & (g > threshold) & (b > threshold)
}
