use image::{imageops, Rgba};

use crate::{
    bbox::{alpha_bbox, difference_bbox, is_opaque, BoundingBox},
    error::SweepError,
    image::Image,
};

use super::{Outcome, SkipReason};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TrimSettings {
    /// Canvas colour that counts as empty when the image has no transparency
    pub background: Rgba<u8>,
    /// Per-channel difference from the background that is still considered empty
    pub noise_floor: u8,
}

impl Default for TrimSettings {
    fn default() -> Self {
        Self {
            background: Rgba([255, 255, 255, 255]),
            noise_floor: 100,
        }
    }
}

/// Crops the image to its content.
///
/// Content is whatever is not fully transparent. When what remains after that
/// has no transparency left, content is further narrowed to whatever stands
/// out from the background colour. Both steps land on a box that neither step
/// would shrink again, so trimming a trimmed image changes nothing.
pub fn trim(image: &mut Image, settings: &TrimSettings) -> Result<Outcome, SweepError> {
    let (width, height) = image.dimensions();
    let full = BoundingBox::of_image(&image.pixels);

    let Some(alpha) = alpha_bbox(&image.pixels) else {
        return Ok(Outcome::Skipped(SkipReason::FullyTransparent));
    };

    let bbox = if is_opaque(&image.pixels, alpha) {
        match difference_bbox(
            &image.pixels,
            alpha,
            settings.background,
            settings.noise_floor,
        ) {
            Some(found) => found,
            None if alpha == full => return Ok(Outcome::Skipped(SkipReason::NoContent)),
            // a blank opaque card on a transparent canvas is cut out as a whole
            None => alpha,
        }
    } else {
        alpha
    };

    if bbox == full {
        return Ok(Outcome::Unchanged);
    }

    log::debug!("{}: cropping to {bbox}", image.path.display());
    image.pixels = imageops::crop_imm(
        &image.pixels,
        bbox.left,
        bbox.top,
        bbox.width(),
        bbox.height(),
    )
    .to_image();

    Ok(Outcome::Cropped {
        before: (width, height),
        after: image.dimensions(),
    })
}
