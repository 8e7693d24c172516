use std::ops::*;
use std::fmt;
use num;
use super::super::base::Float;
use super::Vector2;

pub type Point2f = Point2<Float>;
pub type Point2i = Point2<i32>;

/// Representation of a 2D Point.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[repr(C)]
pub struct Point2<T> {
    pub x: T,
    pub y: T
}

impl<T> Point2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Point2<T> {
        Point2::<T>{x, y}
    }

    #[inline]
    pub fn zero() -> Point2<T>
    where
    T: num::Zero
    {
        Point2::<T>{x: T::zero(), y: T::zero()}
    }

}

impl<T> Add<Vector2<T>> for Point2<T>
where
T: Add<T, Output = T>
{
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vector2<T>) -> Self {
        Point2::<T>{
            x: self.x + rhs.x,
            y: self.y + rhs.y
        }
    }
}

impl<T> Sub<Point2<T>> for Point2<T>
where
T: Sub<T, Output = T>
{
    type Output = Vector2<T>;
    #[inline]
    fn sub(self, rhs: Self) -> Vector2<T> {
        Vector2::<T>{
            x: self.x - rhs.x,
            y: self.y - rhs.y
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
T: Copy + Mul<T, Output = T>
{
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Point2::<T>{
            x: self.x * rhs,
            y: self.y * rhs
        }
    }
}

reverse_mul_scalar!(Point2, {x, y});

impl<T> From<(T, T)> for Point2<T> {
    fn from(p: (T, T)) -> Point2<T> {
        Point2::<T>{
            x: p.0,
            y: p.1
        }
    }
}

impl<T, U> From<Vector2<U>> for Point2<T>
where
T: num::NumCast,
U: num::NumCast
{
    fn from(v: Vector2<U>) -> Point2<T> {
        Point2::<T>{
            x: num::cast(v.x).unwrap(),
            y: num::cast(v.y).unwrap()
        }
    }
}

impl<T> fmt::Display for Point2<T>
where
T: fmt::Display
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {} ]", self.x, self.y)
    }
}
