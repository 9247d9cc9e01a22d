//! Geometric types for fence and icon placement

use std::num::NonZeroU16;

/// Rejected size request
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("invalid geometry: size {width}x{height} must be positive")]
    InvalidGeometry { width: i32, height: i32 },
}

/// Position and size of an on-screen box in logical pixels
///
/// Width and height are always positive: every constructor and
/// [`GeometryBox::resize_to`] check or guarantee it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryBox {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl GeometryBox {
    /// Create a box, rejecting non-positive dimensions
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GeometryError> {
        check_size(width, height)?;
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Square box whose side is known to be positive
    pub const fn square(x: i32, y: i32, side: NonZeroU16) -> Self {
        Self {
            x,
            y,
            width: side.get() as i32,
            height: side.get() as i32,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Top-left corner as `(x, y)`
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Translate the box by the given offset, keeping its size
    pub fn move_by(&self, dx: i32, dy: i32) -> GeometryBox {
        GeometryBox {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Place the top-left corner at `(x, y)`
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Change the size; on error the box is left untouched
    pub fn resize_to(&mut self, width: i32, height: i32) -> Result<(), GeometryError> {
        check_size(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }
}

fn check_size(width: i32, height: i32) -> Result<(), GeometryError> {
    if width <= 0 || height <= 0 {
        return Err(GeometryError::InvalidGeometry { width, height });
    }
    Ok(())
}
