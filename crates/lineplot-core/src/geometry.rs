// File: crates/lineplot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Axis-aligned rectangle in pixel space (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

impl From<RectF> for skia_safe::Rect {
    fn from(r: RectF) -> Self {
        skia_safe::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let r = RectF::from_ltwh(10.0, 10.0, 20.0, 5.0);
        assert!(r.contains(10.0, 15.0));
        assert!(r.contains(30.0, 10.0));
        assert!(!r.contains(30.5, 12.0));
        assert_eq!((r.center_x(), r.center_y()), (20.0, 12.5));
    }
}
