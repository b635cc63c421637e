//! Axis-aligned rectangle in screen space (y grows downward)

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Left edge
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Check if `x` lies strictly between the left and right edges
    pub fn spans_x(&self, x: f32) -> bool {
        self.left() < x && x < self.right()
    }

    /// Move by `dy` along the y axis
    pub fn translate_y(&mut self, dy: f32) {
        self.y += dy;
    }
}
