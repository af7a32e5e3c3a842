use serde::{Deserialize, Serialize};

/// Axis-aligned integer rectangle
///
/// Invariant: `width` and `height` are strictly positive. Split operations
/// preserve the invariant as long as the split offset leaves a positive
/// remainder on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Left edge in world coordinates
    pub x: i32,
    /// Top edge in world coordinates
    pub y: i32,
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

impl Rectangle {
    /// Create a rectangle from its corner and extent
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Covered area in cells
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Split along the horizontal axis at `offset` rows from the top
    ///
    /// Returns the top and bottom halves. The halves cover the original
    /// rectangle exactly, with no gap and no overlap.
    pub const fn split_horizontal(&self, offset: u32) -> (Self, Self) {
        let top = Self::new(self.x, self.y, self.width, offset);
        let bottom = Self::new(
            self.x,
            self.y + offset as i32,
            self.width,
            self.height - offset,
        );
        (top, bottom)
    }

    /// Split along the vertical axis at `offset` columns from the left
    ///
    /// Returns the left and right halves covering the original exactly.
    pub const fn split_vertical(&self, offset: u32) -> (Self, Self) {
        let left = Self::new(self.x, self.y, offset, self.height);
        let right = Self::new(
            self.x + offset as i32,
            self.y,
            self.width - offset,
            self.height,
        );
        (left, right)
    }

    /// Whether another rectangle overlaps this one
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.x + other.width as i32
            && other.x < self.x + self.width as i32
            && self.y < other.y + other.height as i32
            && other.y < self.y + self.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::Rectangle;

    #[test]
    fn test_splits_tile_the_original() {
        let rect = Rectangle::new(2, 3, 20, 10);

        let (top, bottom) = rect.split_horizontal(4);
        assert_eq!(top.area() + bottom.area(), rect.area());
        assert!(!top.intersects(&bottom));
        assert_eq!(bottom.y, 7);

        let (left, right) = rect.split_vertical(12);
        assert_eq!(left.area() + right.area(), rect.area());
        assert!(!left.intersects(&right));
        assert_eq!(right.x, 14);
    }
}
