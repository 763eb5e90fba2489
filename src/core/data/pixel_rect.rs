use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
}

/// The pixel grid of an output image, anchored at (0, 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidDimension { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Row-major index of `point`, or `None` when it lies outside the rect.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}
