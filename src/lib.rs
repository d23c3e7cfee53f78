mod crop;
mod error;

use image::{imageops, RgbaImage};
use std::path::Path;

pub use crop::{BoundingBox, CropOutcome};
pub use error::{Error, Result};

/// Crops the fully transparent border off an image file and writes the result
///
/// The file at `input_path` is decoded and converted to RGBA, so sources
/// without an alpha channel are treated as fully opaque. The minimal bounding
/// box of alpha > 0 content is computed; if the image has any such content the
/// box is cut out and encoded to `output_path` (format inferred from the output
/// extension). A fully transparent input writes nothing and reports
/// `CropOutcome::FullyTransparent`.
///
/// # Parameters
/// * `input_path` - Path to a decodable raster image file
/// * `output_path` - Path the cropped image is written to
///
/// # Returns
/// * `Result<CropOutcome>` - The crop result, or an error from decode, encode
///   or the filesystem
///
/// # Example
/// ```no_run
/// use crop_transparent::{crop_transparent, CropOutcome};
///
/// fn example() -> crop_transparent::Result<()> {
///     match crop_transparent("sprite.png", "sprite-trimmed.png")? {
///         CropOutcome::Cropped { width, height } => {
///             println!("trimmed to {}x{}", width, height);
///         }
///         CropOutcome::FullyTransparent => println!("nothing to keep"),
///     }
///     Ok(())
/// }
/// ```
pub fn crop_transparent(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<CropOutcome> {
    let img = image::open(input_path)?.to_rgba8();

    let bounds = match find_opaque_bounds(&img) {
        Some(bounds) => bounds,
        None => return Ok(CropOutcome::FullyTransparent),
    };

    let cropped = crop_to_bounds(&img, &bounds);
    cropped.save(output_path)?;

    Ok(CropOutcome::Cropped {
        width: cropped.width(),
        height: cropped.height(),
    })
}

/// Computes the minimal bounding box of pixels with alpha > 0
///
/// A single pass over the image accumulates the extremes of every qualifying
/// pixel. Any nonzero alpha counts as content, including barely visible
/// pixels with alpha == 1.
///
/// # Parameters
/// * `img: &RgbaImage` - The image to scan
///
/// # Returns
/// * `Option<BoundingBox>` - The content bounds, or `None` when every pixel is
///   fully transparent
///
/// # Example
/// ```rust
/// use image::{Rgba, RgbaImage};
/// use crop_transparent::find_opaque_bounds;
///
/// let mut img = RgbaImage::new(10, 10);
/// img.put_pixel(4, 4, Rgba([255, 0, 0, 255]));
///
/// let bounds = find_opaque_bounds(&img).unwrap();
/// assert_eq!((bounds.width(), bounds.height()), (1, 1));
/// ```
pub fn find_opaque_bounds(img: &RgbaImage) -> Option<BoundingBox> {
    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0;
    let mut bottom = 0;
    let mut found = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] > 0 {
            left = left.min(x);
            top = top.min(y);
            right = right.max(x);
            bottom = bottom.max(y);
            found = true;
        }
    }

    if !found {
        return None;
    }

    // Stored extremes are inclusive; the box is exclusive on the far edges
    Some(BoundingBox {
        left,
        top,
        right: right + 1,
        bottom: bottom + 1,
    })
}

/// Extracts the sub-grid within `bounds` as a new independent buffer
///
/// The source image is left untouched; pixel values inside the retained
/// region are copied verbatim.
///
/// # Parameters
/// * `img: &RgbaImage` - The source image
/// * `bounds: &BoundingBox` - The region to extract, within the image extent
///
/// # Returns
/// * `RgbaImage` - The cropped copy, `bounds.width()` by `bounds.height()`
pub fn crop_to_bounds(img: &RgbaImage, bounds: &BoundingBox) -> RgbaImage {
    imageops::crop_imm(img, bounds.left, bounds.top, bounds.width(), bounds.height()).to_image()
}
