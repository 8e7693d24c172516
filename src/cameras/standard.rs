use crate::core::base::{Float, lerp, consts::{SCALAR_EPS, BIG_SCALAR, MAX_SCALAR}};
use crate::core::geometry::{Vector3f, Point3f, Ray, Bounds3f};
use crate::core::camera::{Camera, CameraSample};
use crate::core::transform::Transform;
use crate::core::film::Film;
use crate::core::dual::DualVector3;
use crate::core::profiler::Profiler;
use parking_lot::RwLock;
use std::sync::Arc;

/// The baseline projective camera: a pinhole perspective projection
/// looking down -Z, or a parallel orthographic projection when the focal
/// length carries the [`MAX_SCALAR`] sentinel.
///
/// `aperture` is the width of the film back in camera units; the vertical
/// extent follows from the film's aspect ratio.
pub struct StandardCamera {
    pub camera_to_world: Transform,
    pub film: Arc<Film>,
    pub clip_hither: Float,
    pub clip_yon: Float,
    pub shutter_open: Float,
    pub shutter_close: Float,
    focal: Float,
    aperture: Float,
    // far clip derived from the scene bounds while the host leaves clip_yon open
    world_yon: RwLock<Float>,
}

impl StandardCamera {
    pub fn new(
        camera_to_world: Transform,
        film: Arc<Film>,
        clip_hither: Float,
        clip_yon: Float,
        shutter_open: Float,
        shutter_close: Float,
        focal: Float,
        aperture: Float
    ) -> StandardCamera {
        if focal <= 0.0 {
            warn!("perspective camera with non-positive focal length {}", focal);
        }
        StandardCamera {
            camera_to_world,
            film,
            clip_hither,
            clip_yon,
            shutter_open,
            shutter_close,
            focal,
            aperture,
            world_yon: RwLock::new(BIG_SCALAR)
        }
    }

    pub fn focal(&self) -> Float {
        self.focal
    }

    /// False when the focal length holds the orthographic sentinel.
    pub fn is_perspective(&self) -> bool {
        self.focal != MAX_SCALAR
    }

    fn film_height(&self) -> Float {
        self.aperture / self.film.aspect_ratio()
    }

    fn effective_yon(&self) -> Float {
        if self.clip_yon >= BIG_SCALAR {
            *self.world_yon.read()
        } else {
            self.clip_yon
        }
    }

    /// Build the camera-space ray for a sample. Wrapping models modify the
    /// result before pushing it through the world transform.
    pub fn generate_camera_ray(&self, sample: &CameraSample, ray: &mut Ray) -> bool {
        let res_x = self.film.full_resolution.x as Float;
        let res_y = self.film.full_resolution.y as Float;

        // Film-plane point for the raster position, raster Y growing downward
        let fx = (sample.p_film.x / res_x - 0.5) * self.aperture;
        let fy = (0.5 - sample.p_film.y / res_y) * self.film_height();
        let dfx = self.aperture / res_x;
        let dfy = -self.film_height() / res_y;

        *ray = Ray::default();
        if self.is_perspective() {
            let dual = DualVector3::new(
                Vector3f::new(fx, fy, -self.focal),
                Vector3f::new(dfx, 0.0, 0.0),
                Vector3f::new(0.0, dfy, 0.0)
            ).normalize();
            ray.d = dual.val;
            ray.dd_dx = dual.dx;
            ray.dd_dy = dual.dy;
        } else {
            ray.o = Point3f::new(fx, fy, 0.0);
            ray.d = Vector3f::new(0.0, 0.0, -1.0);
            ray.do_dx = Vector3f::new(dfx, 0.0, 0.0);
            ray.do_dy = Vector3f::new(0.0, dfy, 0.0);
        }
        ray.time = lerp(sample.time, self.shutter_open, self.shutter_close);
        ray.t_near = self.clip_hither.max(SCALAR_EPS);
        ray.t_far = self.effective_yon().min(BIG_SCALAR);
        true
    }

    pub(crate) fn ray_to_world(&self, ray: &mut Ray) {
        *ray = self.camera_to_world.transform_ray(ray);
    }
}

impl Camera for StandardCamera {
    fn film(&self) -> Arc<Film> {
        self.film.clone()
    }

    fn generate_ray(&self, sample: &CameraSample, ray: &mut Ray) -> bool {
        let _guard = Profiler::instance().profile("Camera::generate_ray()");
        if !self.generate_camera_ray(sample, ray) {
            return false;
        }
        self.ray_to_world(ray);
        true
    }

    fn object_to_screen(&self, opos: &Point3f, object_to_view: &Transform) -> Option<Point3f> {
        let v_pos = object_to_view.transform_point(opos);

        let res_x = self.film.full_resolution.x as Float;
        let res_y = self.film.full_resolution.y as Float;

        let depth = -v_pos.z;
        let (x, y) = if self.is_perspective() {
            // project onto the film plane through the pinhole
            if depth < SCALAR_EPS {
                return None;
            }
            let z = self.focal / depth;
            (
                (v_pos.x * z / self.aperture + 0.5) * res_x,
                (0.5 - v_pos.y * z / self.film_height()) * res_y
            )
        } else {
            (
                (v_pos.x / self.aperture + 0.5) * res_x,
                (0.5 - v_pos.y / self.film_height()) * res_y
            )
        };

        if x < 0.0 || x > res_x || y < 0.0 || y > res_y {
            return None;
        }
        Some(Point3f::new(x, y, depth))
    }

    fn update_world_bbox(&self, world_bbox: &Bounds3f) {
        // Derive an automatic far clip that keeps the whole scene in front
        // of the camera; only consulted while clip_yon is left open.
        let eye = self.camera_to_world.transform_point(&Point3f::zero());
        let mut far: Float = 0.0;
        for corner in 0..8 {
            far = far.max(eye.distance(&world_bbox.corner(corner)));
        }
        *self.world_yon.write() = far.max(SCALAR_EPS * 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Point2f;
    use crate::core::geometry::Point2i;

    fn test_film() -> Arc<Film> {
        Arc::new(Film::new(Point2i::new(640, 480)))
    }

    fn perspective_camera() -> StandardCamera {
        StandardCamera::new(
            Transform::default(),
            test_film(),
            1e-3,
            1e6,
            0.0,
            1.0,
            1.0,
            2.0
        )
    }

    #[test]
    fn center_ray_looks_down_negative_z() {
        let camera = perspective_camera();
        let sample = CameraSample{
            p_film: Point2f::new(320.0, 240.0),
            ..Default::default()
        };
        let mut ray = Ray::default();
        assert!(camera.generate_ray(&sample, &mut ray));
        assert!(ray.d.x.abs() < 1e-6);
        assert!(ray.d.y.abs() < 1e-6);
        assert!((ray.d.z - -1.0).abs() < 1e-6);
        assert!(ray.t_near >= SCALAR_EPS);
        assert!(ray.t_near < ray.t_far);
    }

    #[test]
    fn perspective_projection_inverts_ray_generation() {
        let camera = perspective_camera();
        let sample = CameraSample{
            p_film: Point2f::new(123.0, 456.0),
            ..Default::default()
        };
        let mut ray = Ray::default();
        assert!(camera.generate_ray(&sample, &mut ray));
        let p = ray.point_at_time(7.0);
        let rpos = camera.object_to_screen(&p, &Transform::default()).unwrap();
        assert!((rpos.x - 123.0).abs() < 1e-2);
        assert!((rpos.y - 456.0).abs() < 1e-2);
    }

    #[test]
    fn behind_eye_points_are_rejected() {
        let camera = perspective_camera();
        assert!(camera.object_to_screen(&Point3f::new(0.0, 0.0, 3.0), &Transform::default()).is_none());
    }

    #[test]
    fn orthographic_rays_are_parallel() {
        let camera = StandardCamera::new(
            Transform::default(),
            test_film(),
            1e-3,
            1e6,
            0.0,
            1.0,
            MAX_SCALAR,
            2.0
        );
        assert!(!camera.is_perspective());
        for x in &[10.0, 320.0, 630.0] {
            let sample = CameraSample{
                p_film: Point2f::new(*x, 100.0),
                ..Default::default()
            };
            let mut ray = Ray::default();
            assert!(camera.generate_ray(&sample, &mut ray));
            assert_eq!(ray.d, Vector3f::new(0.0, 0.0, -1.0));
        }
    }

    #[test]
    fn scene_bounds_tighten_open_far_clip() {
        let camera = StandardCamera::new(
            Transform::default(),
            test_film(),
            1e-3,
            BIG_SCALAR,
            0.0,
            1.0,
            1.0,
            2.0
        );
        let bbox = Bounds3f::new(
            Point3f::new(-10.0, -10.0, -10.0),
            Point3f::new(10.0, 0.0, 0.0)
        ).union_point(&Point3f::new(10.0, 10.0, 10.0));
        camera.update_world_bbox(&bbox);
        let sample = CameraSample{
            p_film: Point2f::new(320.0, 240.0),
            ..Default::default()
        };
        let mut ray = Ray::default();
        assert!(camera.generate_ray(&sample, &mut ray));
        let expected = (3.0 as Float).sqrt() * 10.0;
        assert!((ray.t_far - expected).abs() < 1e-3);
    }
}
