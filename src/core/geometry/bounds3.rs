use num;
use super::Point3;
use super::super::base::Float;

pub type Bounds3f = Bounds3<Float>;

/// An axis aligned 3D bounding box.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Bounds3<T> {
    pub min: Point3<T>,
    pub max: Point3<T>
}

impl<T> Bounds3<T> {
    /// Create a Bounds3 enclosing the two given points.
    pub fn new(p1: Point3<T>, p2: Point3<T>) -> Bounds3<T>
    where
    T: Copy + PartialOrd
    {
        Bounds3::<T>{
            min: Point3::<T>{
                x: if p1.x < p2.x { p1.x } else { p2.x },
                y: if p1.y < p2.y { p1.y } else { p2.y },
                z: if p1.z < p2.z { p1.z } else { p2.z }
            },
            max: Point3::<T>{
                x: if p1.x > p2.x { p1.x } else { p2.x },
                y: if p1.y > p2.y { p1.y } else { p2.y },
                z: if p1.z > p2.z { p1.z } else { p2.z }
            }
        }
    }

    /// Return one of the 8 corners of the box.
    pub fn corner(&self, corner: usize) -> Point3<T>
    where
    T: Copy
    {
        debug_assert!(corner < 8);
        Point3::<T>{
            x: if corner & 1 == 0 { self.min.x } else { self.max.x },
            y: if corner & 2 == 0 { self.min.y } else { self.max.y },
            z: if corner & 4 == 0 { self.min.z } else { self.max.z }
        }
    }

    /// Grow the bounds to enclose another point.
    pub fn union_point(&self, p: &Point3<T>) -> Bounds3<T>
    where
    T: Copy + PartialOrd + num::Num
    {
        Bounds3::<T>{
            min: Point3::<T>{
                x: if self.min.x < p.x { self.min.x } else { p.x },
                y: if self.min.y < p.y { self.min.y } else { p.y },
                z: if self.min.z < p.z { self.min.z } else { p.z }
            },
            max: Point3::<T>{
                x: if self.max.x > p.x { self.max.x } else { p.x },
                y: if self.max.y > p.y { self.max.y } else { p.y },
                z: if self.max.z > p.z { self.max.z } else { p.z }
            }
        }
    }
}
