use crate::core::base::Float;
use super::{Vector3f, Point3f};
use num;
use std::fmt;

/// A camera ray together with its raster-space footprint.
///
/// The derivative members hold the per-pixel step of the origin and the
/// direction with respect to raster X and Y, used downstream for
/// anisotropic texture filtering.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Ray {
    pub o: Point3f,
    pub d: Vector3f,
    pub do_dx: Vector3f,
    pub do_dy: Vector3f,
    pub dd_dx: Vector3f,
    pub dd_dy: Vector3f,
    pub t_near: Float,
    pub t_far: Float,
    pub time: Float,
}

impl Ray {
    pub fn new(o: Point3f, d: Vector3f) -> Ray {
        Ray{
            o,
            d,
            do_dx: Vector3f::zero(),
            do_dy: Vector3f::zero(),
            dd_dx: Vector3f::zero(),
            dd_dy: Vector3f::zero(),
            t_near: num::Zero::zero(),
            t_far: num::Float::infinity(),
            time: num::Zero::zero(),
        }
    }

    /// Return the Point3 at a given distance along the ray.
    pub fn point_at_time(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
}

impl Default for Ray {
    fn default() -> Ray {
        Ray::new(Point3f::zero(), Vector3f::zero())
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[o={}, d={}, t_near={}, t_far={}, time={}]", self.o, self.d, self.t_near, self.t_far, self.time)
    }
}
