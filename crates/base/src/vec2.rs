use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

/// Two-component vector, used both for pixel coordinates (`Vec2<i32>`)
/// and for image dimensions (`Vec2<usize>`, `x` = width, `y` = height).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Mul<Output = T> + Copy> Vec2<T> {
    /// Product of the components; the pixel count when used as a size.
    pub fn area(&self) -> T {
        self.x * self.y
    }
}

impl Vec2<i32> {
    /// Z component of the cross product `(a - self) x (b - self)`.
    ///
    /// Positive for a counter-clockwise turn (in a y-up frame), zero when the
    /// three points are collinear. Computed in i64 so pixel coordinates
    /// cannot overflow.
    pub fn cross(self, a: Self, b: Self) -> i64 {
        let (ox, oy) = (self.x as i64, self.y as i64);
        let (ax, ay) = (a.x as i64 - ox, a.y as i64 - oy);
        let (bx, by) = (b.x as i64 - ox, b.y as i64 - oy);
        ax * by - ay * bx
    }
}
