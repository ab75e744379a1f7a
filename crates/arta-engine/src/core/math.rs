//! Integer rectangles and float circles used for source regions,
//! destination regions and bounding volumes.

use glam::Vec2;

/// Axis-aligned integer rectangle (top-left origin, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Center point, in float coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left() as f32
            && point.x < self.right() as f32
            && point.y >= self.top() as f32
            && point.y < self.bottom() as f32
    }

    /// True when the two rectangles overlap by a non-zero area.
    pub fn intersects(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }
}

/// A circle, used as a cheap bounding volume for sprites.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Points on the boundary count as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).length() <= self.radius
    }

    /// Touching circles count as intersecting.
    pub fn intersects(&self, other: &Circle) -> bool {
        (other.center - self.center).length() <= self.radius + other.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(9.5, 9.5)));
        assert!(!r.contains(Vec2::new(10.0, 5.0)));
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        // Sharing an edge is not an overlap
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
    }

    #[test]
    fn circle_contains_boundary() {
        let c = Circle::new(Vec2::ZERO, 5.0);
        assert!(c.contains(Vec2::new(3.0, 4.0)));
        assert!(!c.contains(Vec2::new(4.0, 4.0)));
    }

    #[test]
    fn touching_circles_intersect() {
        let a = Circle::new(Vec2::ZERO, 2.0);
        let b = Circle::new(Vec2::new(5.0, 0.0), 3.0);
        assert!(a.intersects(&b));
        let far = Circle::new(Vec2::new(5.1, 0.0), 3.0);
        assert!(!a.intersects(&far));
    }
}
