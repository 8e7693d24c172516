//! Type definitions and constants.
use std::ops::{Sub, Add, Mul};

#[cfg(feature = "float_as_double")]
mod float_mod {
    pub type Float = f64;
    pub mod consts {
        pub use std::f64::consts::*;
    }
}
#[cfg(not(feature = "float_as_double"))]
mod float_mod {
    pub type Float = f32;
    pub mod consts {
        pub use std::f32::consts::*;
    }
}

pub use float_mod::Float;
pub mod consts {
    use super::float_mod::Float;
    pub use super::float_mod::consts::*;
    /// Smallest distance treated as non-degenerate; also the floor for ray t_near.
    pub const SCALAR_EPS: Float = 1e-4;
    /// Largest meaningful distance; the ceiling for ray t_far.
    pub const BIG_SCALAR: Float = 1e30;
    /// Sentinel focal length selecting the orthographic projection.
    pub const MAX_SCALAR: Float = Float::MAX;
    pub const INV_PI: Float = 1.0 / PI;
    pub const INV_2_PI: Float = 0.5 / PI;
}

/// Convert an angle from degrees into radians.
pub fn radians(deg: Float) -> Float {
    consts::PI / 180.0 * deg
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp<S, T>(t: S, a: T, b: T) -> T
where
S: num::One + Sub<S, Output = S> + Copy,
T: Add<T, Output=T> + Mul<S, Output=T>
{
    a * (S::one() - t) + b * t
}
