//! Dual-number style propagation of raster derivatives through vector
//! operations.

use super::base::{Float, consts::SCALAR_EPS};
use super::geometry::Vector3f;

/// A direction carrying its two raster-space tangent vectors.
///
/// Operations on the value update both tangents through the chain rule, so
/// a ray direction and its X/Y pixel derivatives stay consistent.
#[derive(Debug, Default, Copy, Clone)]
pub struct DualVector3 {
    pub val: Vector3f,
    pub dx: Vector3f,
    pub dy: Vector3f,
}

impl DualVector3 {
    pub fn new(val: Vector3f, dx: Vector3f, dy: Vector3f) -> DualVector3 {
        DualVector3{val, dx, dy}
    }

    /// Normalize the value and carry both tangents through the quotient
    /// rule, keeping them the derivatives of the normalized direction.
    ///
    /// A near-zero value cannot be meaningfully normalized and collapses
    /// to zero rather than producing NaNs.
    pub fn normalize(&self) -> DualVector3 {
        let length = self.val.length();
        if length < SCALAR_EPS {
            return DualVector3::default();
        }
        let inv: Float = 1.0 / length;
        let n = self.val * inv;
        DualVector3{
            val: n,
            dx: (self.dx - n * n.dot(&self.dx)) * inv,
            dy: (self.dy - n * n.dot(&self.dy)) * inv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Float = 1e-4;

    #[test]
    fn normalize_matches_finite_difference() {
        let h = 1e-3;
        let v = Vector3f::new(0.3, -1.2, 2.5);
        let dx = Vector3f::new(0.01, 0.02, -0.005);
        let dual = DualVector3::new(v, dx, Vector3f::zero()).normalize();
        let stepped = (v + dx * h).normalize();
        let fd = (stepped - dual.val) / h;
        assert!((fd - dual.dx).length() < 1e-2);
    }

    #[test]
    fn normalized_tangents_stay_tangent() {
        let dual = DualVector3::new(
            Vector3f::new(1.0, 0.25, -1.0),
            Vector3f::new(0.0, 0.0, 0.1),
            Vector3f::new(0.0, 0.1, 0.0),
        ).normalize();
        assert!((dual.val.length() - 1.0).abs() < EPS);
        assert!(dual.val.dot(&dual.dx).abs() < EPS);
        assert!(dual.val.dot(&dual.dy).abs() < EPS);
    }

    #[test]
    fn normalize_of_degenerate_value_is_zero() {
        let dual = DualVector3::new(
            Vector3f::new(1e-6, 0.0, 0.0),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::zero(),
        ).normalize();
        assert_eq!(dual.val, Vector3f::zero());
        assert_eq!(dual.dx, Vector3f::zero());
    }
}
