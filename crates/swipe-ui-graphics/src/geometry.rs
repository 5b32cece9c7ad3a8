//! Geometric primitives: Point, Size, Rect

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Rect of `size` whose center sits at `center`.
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self {
            x: center.x - size.width / 2.0,
            y: center.y - size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Smallest rect with integral edges that contains this one.
    pub fn integral(&self) -> Self {
        let x = self.x.floor();
        let y = self.y.floor();
        Self {
            x,
            y,
            width: self.max_x().ceil() - x,
            height: self.max_y().ceil() - y,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.max_x() && y <= self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_reports_its_center() {
        let rect = Rect::centered_at(Point::new(30.0, 20.0), Size::new(10.0, 8.0));
        assert_eq!(rect, Rect { x: 25.0, y: 16.0, width: 10.0, height: 8.0 });
        assert_eq!(rect.center(), Point::new(30.0, 20.0));
    }

    #[test]
    fn integral_rounds_outward() {
        let rect = Rect { x: 1.5, y: 2.25, width: 3.0, height: 1.5 };
        let integral = rect.integral();
        assert_eq!(integral, Rect { x: 1.0, y: 2.0, width: 4.0, height: 2.0 });
        assert!(integral.contains(rect.x, rect.y));
        assert!(integral.contains(rect.max_x(), rect.max_y()));
    }

    #[test]
    fn translate_keeps_size() {
        let rect = Rect::from_size(Size::new(320.0, 40.0)).translate(-80.0, 0.0);
        assert_eq!(rect.x, -80.0);
        assert_eq!(rect.width, 320.0);
    }
}
