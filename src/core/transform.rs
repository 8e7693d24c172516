use super::geometry::{Vector3f, Point3f, Ray};
use super::matrix::Matrix4x4;
use super::base::{Float, radians};
use std::ops::Mul;

/// An affine transformation together with its inverse.
#[derive(Debug, Copy, Clone)]
pub struct Transform {
    pub m: Matrix4x4,
    pub m_inv: Matrix4x4,
}

impl Transform {
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float
    ) -> Transform {
        let m = Matrix4x4::new(t00, t01, t02, t03, t10, t11, t12, t13, t20, t21, t22, t23, t30, t31, t32, t33);
        Transform{
            m,
            m_inv: m.inverse()
        }
    }

    /// Return the inverse of this Transform.
    pub fn inverse(&self) -> Transform {
        Transform{
            m: self.m_inv,
            m_inv: self.m
        }
    }

    /// Create a Transform representing a translation.
    pub fn translate(delta: &Vector3f) -> Transform {
        Transform{
            m: Matrix4x4::new(1.0, 0.0, 0.0, delta.x,
                0.0, 1.0, 0.0, delta.y,
                0.0, 0.0, 1.0, delta.z,
                0.0, 0.0, 0.0, 1.0
                ),
            m_inv: Matrix4x4::new(1.0, 0.0, 0.0, -delta.x,
                0.0, 1.0, 0.0, -delta.y,
                0.0, 0.0, 1.0, -delta.z,
                0.0, 0.0, 0.0, 1.0
                )
        }
    }

    /// Creates a Transform that represents a scale.
    pub fn scale(x: Float, y: Float, z: Float) -> Transform {
        Transform{
            m: Matrix4x4::new(x, 0.0, 0.0, 0.0,
                0.0, y, 0.0, 0.0,
                0.0, 0.0, z, 0.0,
                0.0, 0.0, 0.0, 1.0
                ),
            m_inv: Matrix4x4::new(1.0 / x, 0.0, 0.0, 0.0,
                0.0, 1.0 / y, 0.0, 0.0,
                0.0, 0.0, 1.0 / z, 0.0,
                0.0, 0.0, 0.0, 1.0
                )
        }
    }

    /// Create a Transform of a clock-wise rotation around the Y axis in degrees.
    pub fn rotate_y(theta: Float) -> Transform {
        let theta = radians(theta);
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();
        let m = Matrix4x4::new(
            cos_theta, 0.0, sin_theta, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -sin_theta, 0.0, cos_theta, 0.0,
            0.0, 0.0, 0.0, 1.0
        );
        Transform{
            m,
            m_inv: m.transpose()
        }
    }

    /// Create a world-to-camera viewing Transform; the camera-to-world
    /// transform is its inverse.
    pub fn look_at(pos: &Point3f, look: &Point3f, up: &Vector3f) -> Transform {
        let mut camera_to_world = Matrix4x4::default();
        // Initialize fourth column of viewing matrix
        camera_to_world.m[0][3] = pos.x;
        camera_to_world.m[1][3] = pos.y;
        camera_to_world.m[2][3] = pos.z;
        camera_to_world.m[3][3] = 1.0;
        // Initialize first three columns of viewing matrix
        let dir = (*look - *pos).normalize();
        let right = up.normalize().cross(&dir).normalize();
        let new_up = dir.cross(&right);
        camera_to_world.m[0][0] = right.x;
        camera_to_world.m[1][0] = right.y;
        camera_to_world.m[2][0] = right.z;
        camera_to_world.m[3][0] = 0.;
        camera_to_world.m[0][1] = new_up.x;
        camera_to_world.m[1][1] = new_up.y;
        camera_to_world.m[2][1] = new_up.z;
        camera_to_world.m[3][1] = 0.;
        camera_to_world.m[0][2] = dir.x;
        camera_to_world.m[1][2] = dir.y;
        camera_to_world.m[2][2] = dir.z;
        camera_to_world.m[3][2] = 0.;
        Transform{
            m: camera_to_world.inverse(),
            m_inv: camera_to_world
        }
    }

    /// Transform a given Point3f.
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let x = self.m.m[0][0] * p.x + self.m.m[0][1] * p.y + self.m.m[0][2] * p.z + self.m.m[0][3];
        let y = self.m.m[1][0] * p.x + self.m.m[1][1] * p.y + self.m.m[1][2] * p.z + self.m.m[1][3];
        let z = self.m.m[2][0] * p.x + self.m.m[2][1] * p.y + self.m.m[2][2] * p.z + self.m.m[2][3];
        let w = self.m.m[3][0] * p.x + self.m.m[3][1] * p.y + self.m.m[3][2] * p.z + self.m.m[3][3];
        if w == 1.0 {
            Point3f::new(x, y, z)
        }
        else {
            Point3f::new(x / w, y / w, z / w)
        }
    }

    /// Transform a given Vector3f.
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        Vector3f{
            x: self.m.m[0][0] * v.x + self.m.m[0][1] * v.y + self.m.m[0][2] * v.z,
            y: self.m.m[1][0] * v.x + self.m.m[1][1] * v.y + self.m.m[1][2] * v.z,
            z: self.m.m[2][0] * v.x + self.m.m[2][1] * v.y + self.m.m[2][2] * v.z
        }
    }

    /// Transform a Ray: the origin maps as a point, the direction and all
    /// four footprint derivatives map as vectors.
    pub fn transform_ray(&self, r: &Ray) -> Ray {
        Ray{
            o: self.transform_point(&r.o),
            d: self.transform_vector(&r.d),
            do_dx: self.transform_vector(&r.do_dx),
            do_dy: self.transform_vector(&r.do_dy),
            dd_dx: self.transform_vector(&r.dd_dx),
            dd_dy: self.transform_vector(&r.dd_dy),
            t_near: r.t_near,
            t_far: r.t_far,
            time: r.time
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform{
            m: Matrix4x4::default(),
            m_inv: Matrix4x4::default()
        }
    }
}

impl PartialEq for Transform {
    fn eq(&self, rhs: &Transform) -> bool {
        self.m == rhs.m && self.m_inv == rhs.m_inv
    }
}

impl Mul for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Transform {
        Transform{
            m: self.m.mul(&rhs.m),
            m_inv: rhs.m_inv.mul(&self.m_inv)
        }
    }
}

impl From<Matrix4x4> for Transform {
    fn from(m: Matrix4x4) -> Transform {
        Transform{
            m,
            m_inv: m.inverse()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_moves_ray_origin_only() {
        let t = Transform::translate(&Vector3f::new(1.0, 2.0, 3.0));
        let r = Ray::new(Point3f::zero(), Vector3f::new(0.0, 0.0, -1.0));
        let out = t.transform_ray(&r);
        assert_eq!(out.o, Point3f::new(1.0, 2.0, 3.0));
        assert_eq!(out.d, r.d);
    }

    #[test]
    fn rotate_y_quarter_turn() {
        let t = Transform::rotate_y(90.0);
        let v = t.transform_vector(&Vector3f::new(0.0, 0.0, -1.0));
        assert!((v.x - -1.0).abs() < 1e-5);
        assert!(v.y.abs() < 1e-5);
        assert!(v.z.abs() < 1e-5);
    }

    #[test]
    fn look_at_inverse_maps_origin_to_eye() {
        let w2c = Transform::look_at(
            &Point3f::new(0.0, 0.0, 5.0),
            &Point3f::zero(),
            &Vector3f::new(0.0, 1.0, 0.0)
        );
        let eye = w2c.inverse().transform_point(&Point3f::zero());
        assert!((eye.x - 0.0).abs() < 1e-5);
        assert!((eye.y - 0.0).abs() < 1e-5);
        assert!((eye.z - 5.0).abs() < 1e-5);
    }
}
