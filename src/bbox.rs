//! Bounding boxes of the non-empty region of an image.

use std::fmt::Display;

use image::{Rgba, RgbaImage};

/// A rectangle in pixel coordinates. `right` and `bottom` are exclusive,
/// so the box covering a whole `w`x`h` image is `(0, 0, w, h)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Whether the box spans the entire image of the given size
    pub fn covers(&self, width: u32, height: u32) -> bool {
        *self
            == BoundingBox {
                left: 0,
                top: 0,
                right: width,
                bottom: height,
            }
    }

    /// The box covering all of `image`
    pub fn of_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    fn from_point(x: u32, y: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + 1,
            bottom: y + 1,
        }
    }

    fn include(&mut self, x: u32, y: u32) {
        self.left = self.left.min(x);
        self.top = self.top.min(y);
        self.right = self.right.max(x + 1);
        self.bottom = self.bottom.max(y + 1);
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Smallest box within `region` enclosing every pixel for which `is_content`
/// holds, or `None` if there is no such pixel.
fn bbox_where(
    image: &RgbaImage,
    region: BoundingBox,
    is_content: impl Fn(&Rgba<u8>) -> bool,
) -> Option<BoundingBox> {
    let mut result: Option<BoundingBox> = None;
    for y in region.top..region.bottom {
        for x in region.left..region.right {
            if is_content(image.get_pixel(x, y)) {
                match result.as_mut() {
                    Some(bbox) => bbox.include(x, y),
                    None => result = Some(BoundingBox::from_point(x, y)),
                }
            }
        }
    }
    result
}

/// Box around all pixels that are not fully transparent
pub fn alpha_bbox(image: &RgbaImage) -> Option<BoundingBox> {
    bbox_where(image, BoundingBox::of_image(image), |pixel| pixel[3] != 0)
}

/// Whether every pixel inside `region` is fully opaque
pub fn is_opaque(image: &RgbaImage, region: BoundingBox) -> bool {
    bbox_where(image, region, |pixel| pixel[3] != u8::MAX).is_none()
}

/// Box within `region` around all pixels that differ from `background` by more
/// than `noise_floor` in at least one channel, alpha included.
///
/// Subtracting the noise floor from the raw difference is what makes faint
/// compression noise and anti-aliasing halos around a white canvas disappear.
/// A noise floor of 0 treats any difference at all as content.
pub fn difference_bbox(
    image: &RgbaImage,
    region: BoundingBox,
    background: Rgba<u8>,
    noise_floor: u8,
) -> Option<BoundingBox> {
    bbox_where(image, region, |pixel| {
        pixel
            .0
            .iter()
            .zip(background.0.iter())
            .any(|(&channel, &bg)| channel.abs_diff(bg) > noise_floor)
    })
}
