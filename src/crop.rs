/// The minimal rectangle enclosing every pixel with alpha > 0
///
/// Coordinates use the image convention with the origin (0,0) at the top-left
/// corner. `right` and `bottom` are exclusive, so `right - left` and
/// `bottom - top` are the dimensions of the cropped result. A valid box always
/// has at least one alpha > 0 pixel touching each of its four edges.
///
/// # Fields
/// * `left: u32` - X-coordinate of the leftmost column containing content
/// * `top: u32` - Y-coordinate of the topmost row containing content
/// * `right: u32` - One past the rightmost column containing content
/// * `bottom: u32` - One past the bottommost row containing content
///
/// # Example
/// ```rust
/// use crop_transparent::BoundingBox;
///
/// // Content occupies columns 4..=9 and rows 2..=5
/// let bounds = BoundingBox { left: 4, top: 2, right: 10, bottom: 6 };
/// assert_eq!(bounds.width(), 6);
/// assert_eq!(bounds.height(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    /// Width of the box in pixels
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the box in pixels
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// The non-error result of a crop operation
///
/// A fully transparent input is a normal terminal outcome, not a failure: no
/// output file is written and there is no crop size to report. Callers branch
/// on this to decide what to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropOutcome {
    /// The cropped image was written; dimensions of the written file
    Cropped { width: u32, height: u32 },
    /// Every pixel had alpha == 0; nothing was written
    FullyTransparent,
}
