use core::ops::{Add, Mul, Sub};

use num_traits::Float;

/// A point in 2d euclidean space, generic over its scalar type.
///
/// Immutable value type; a point has no identity beyond its coordinates.
/// Coordinates are read back through the `x()`/`y()` accessors.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Point2<T>
where
    T: Float,
{
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> T {
        self.y
    }

    /// Returns the euclidean distance between self and other.
    pub fn distance(&self, other: Self) -> T {
        (*self - other).squared_length().sqrt()
    }

    /// Returns the squared L2 norm of the point interpreted as a vector.
    pub fn squared_length(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Returns true if neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
