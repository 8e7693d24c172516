use std::ops::*;
use std::fmt;
use num;
use super::super::base::Float;
use super::Vector3;

pub type Point3f = Point3<Float>;

/// Representation of a 3D Point.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[repr(C)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T
}

impl<T> Point3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Point3<T> {
        Point3::<T>{x, y, z}
    }

    #[inline]
    pub fn zero() -> Point3<T>
    where
    T: num::Zero
    {
        Point3::<T>{x: T::zero(), y: T::zero(), z: T::zero()}
    }

    /// Calculate the squared distance between two Point3.
    pub fn distance_squared(&self, o: &Point3<T>) -> T
    where
    T: Copy + Add<T, Output = T> + Sub<T, Output = T> + Mul<T, Output = T>
    {
        let dx = self.x - o.x;
        let dy = self.y - o.y;
        let dz = self.z - o.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Calculate the distance between two Point3.
    pub fn distance(&self, o: &Point3<T>) -> Float
    where
    T: Copy + Add<T, Output = T> + Sub<T, Output = T> + Mul<T, Output = T> + Into<Float>
    {
        Float::sqrt(self.distance_squared(o).into())
    }

}

impl<T> Add<Vector3<T>> for Point3<T>
where
T: Add<T, Output = T>
{
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vector3<T>) -> Self {
        Point3::<T>{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z
        }
    }
}

impl<T> Sub<Point3<T>> for Point3<T>
where
T: Sub<T, Output = T>
{
    type Output = Vector3<T>;
    #[inline]
    fn sub(self, rhs: Self) -> Vector3<T> {
        Vector3::<T>{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z
        }
    }
}

impl<T> Sub<Vector3<T>> for Point3<T>
where
T: Sub<T, Output = T>
{
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Vector3<T>) -> Self {
        Point3::<T>{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z
        }
    }
}

impl<T> Mul<T> for Point3<T>
where
T: Copy + Mul<T, Output = T>
{
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Point3::<T>{
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs
        }
    }
}

reverse_mul_scalar!(Point3, {x, y, z});

impl<T, U> From<Vector3<U>> for Point3<T>
where
T: num::NumCast,
U: num::NumCast
{
    fn from(v: Vector3<U>) -> Point3<T> {
        Point3::<T>{
            x: num::cast(v.x).unwrap(),
            y: num::cast(v.y).unwrap(),
            z: num::cast(v.z).unwrap()
        }
    }
}

impl<T> fmt::Display for Point3<T>
where
T: fmt::Display
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}
