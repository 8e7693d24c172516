use crate::core::base::{Float, consts::{SCALAR_EPS, BIG_SCALAR}};
use crate::core::geometry::{Vector3f, Point3f, Ray};
use crate::core::camera::{Camera, CameraSample, Feature, FeatureParams};
use crate::core::transform::Transform;
use crate::core::film::Film;
use crate::core::dual::DualVector3;
use crate::core::profiler::Profiler;
use super::StereoParams;
use std::sync::Arc;

/// One face of the unfolded cube strip.
///
/// Both directions of the mapping are table driven: `to_face` carries the
/// per-face rotation into the face-local frame, `raster_offset` the slot
/// of the face in the projection strip, and `from_bin`/`ray_direction`
/// the generate-side layout. The offset table places +Z at slot 5 and -Z
/// at slot 4 while the bin order walks +X, -X, +Y, -Y, -Z, +Z; the two
/// tables only line up as a pair, so neither may be reordered on its own.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CubeFace {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl CubeFace {
    /// Face owning the dominant axis of a view-space direction.
    pub fn classify(v: &Vector3f) -> CubeFace {
        match v.abs().max_dimension() {
            0 => if v.x > 0.0 { CubeFace::PosX } else { CubeFace::NegX },
            1 => if v.y > 0.0 { CubeFace::PosY } else { CubeFace::NegY },
            _ => if v.z > 0.0 { CubeFace::PosZ } else { CubeFace::NegZ },
        }
    }

    /// Rotate a view-space vector into this face's local frame, where the
    /// face's dominant axis lands on -Z the way the forward projection
    /// expects it.
    pub fn to_face(self, v: &Vector3f) -> Vector3f {
        match self {
            CubeFace::PosX => Vector3f::new(v.z, v.y, -v.x),
            CubeFace::NegX => Vector3f::new(-v.z, v.y, v.x),
            CubeFace::PosY => Vector3f::new(-v.x, -v.z, -v.y),
            CubeFace::NegY => Vector3f::new(v.x, -v.z, v.y),
            CubeFace::PosZ => Vector3f::new(-v.x, v.y, -v.z),
            CubeFace::NegZ => Vector3f::new(v.x, v.y, v.z),
        }
    }

    /// Slot of this face in the horizontal projection strip.
    pub fn raster_offset(self) -> Float {
        match self {
            CubeFace::PosX => 0.0,
            CubeFace::NegX => 1.0,
            CubeFace::PosY => 2.0,
            CubeFace::NegY => 3.0,
            CubeFace::PosZ => 5.0,
            CubeFace::NegZ => 4.0,
        }
    }

    /// Face rendered by the k-th strip bin of `generate_ray`.
    pub fn from_bin(bin: usize) -> CubeFace {
        match bin {
            0 => CubeFace::PosX,
            1 => CubeFace::NegX,
            2 => CubeFace::PosY,
            3 => CubeFace::NegY,
            4 => CubeFace::NegZ,
            _ => CubeFace::PosZ,
        }
    }

    /// Unnormalized ray direction and raster derivatives for this face.
    /// `u` is the horizontal position within the face in [-1,1], `py` the
    /// vertical film coordinate, `pcx`/`pcy` the pixel-to-camera steps.
    fn ray_direction(self, u: Float, py: Float, pcx: Float, pcy: Float, focal: Float) -> (Vector3f, Vector3f, Vector3f) {
        match self {
            CubeFace::PosX => (
                Vector3f::new(focal, py, u),
                Vector3f::new(0.0, 0.0, pcx),
                Vector3f::new(0.0, -pcy, 0.0)
            ),
            CubeFace::NegX => (
                Vector3f::new(-focal, py, -u),
                Vector3f::new(0.0, 0.0, -pcx),
                Vector3f::new(0.0, -pcy, 0.0)
            ),
            CubeFace::PosY => (
                Vector3f::new(u, focal, py),
                Vector3f::new(pcx, 0.0, 0.0),
                Vector3f::new(0.0, 0.0, -pcy)
            ),
            CubeFace::NegY => (
                Vector3f::new(u, -focal, -py),
                Vector3f::new(pcx, 0.0, 0.0),
                Vector3f::new(0.0, 0.0, pcy)
            ),
            CubeFace::NegZ => (
                Vector3f::new(u, py, -focal),
                Vector3f::new(pcx, 0.0, 0.0),
                Vector3f::new(0.0, -pcy, 0.0)
            ),
            CubeFace::PosZ => (
                Vector3f::new(-u, py, focal),
                Vector3f::new(-pcx, 0.0, 0.0),
                Vector3f::new(0.0, -pcy, 0.0)
            ),
        }
    }
}

/// A camera projecting onto the six cube faces unfolded into a horizontal
/// strip of width 6 x faceSize, each face a focal length 1 pinhole. With
/// stereo enabled each horizontal half of the frame holds a full strip
/// for one eye.
pub struct CubemapCamera {
    pub camera_to_world: Transform,
    pub film: Arc<Film>,
    params: StereoParams,
}

impl CubemapCamera {
    pub fn new(camera_to_world: Transform, film: Arc<Film>, params: StereoParams) -> CubemapCamera {
        CubemapCamera{
            camera_to_world,
            film,
            params
        }
    }
}

impl Camera for CubemapCamera {
    fn film(&self) -> Arc<Film> {
        self.film.clone()
    }

    fn generate_ray(&self, sample: &CameraSample, ray: &mut Ray) -> bool {
        let _guard = Profiler::instance().profile("Camera::generate_ray()");
        let res_x = self.film.full_resolution.x as Float;
        let res_y = self.film.full_resolution.y as Float;

        let focal: Float = 1.0;
        let image_center_y = res_y * 0.5;
        let mut pixel_to_camera_x = 2.0 / (res_x / 6.0);
        let pixel_to_camera_y = -2.0 / res_y;

        let mut raster = sample.p_film;
        ray.o = Point3f::zero();
        ray.do_dx = Vector3f::zero();
        ray.do_dy = Vector3f::zero();

        if self.params.stereo {
            let half_res_x = res_x * 0.5;
            if raster.x < half_res_x {
                raster.x *= 2.0;
                ray.o.x -= 0.5 * self.params.eye_distance;
            }
            else {
                raster.x = (raster.x - half_res_x) * 2.0;
                ray.o.x += 0.5 * self.params.eye_distance;
            }
            pixel_to_camera_x *= 2.0;
        }

        // Pick the strip bin and build the face-local direction
        let sx = (raster.x / res_x) * 6.0;
        let bin = num::clamp(sx as i32, 0, 5) as usize;
        let face = CubeFace::from_bin(bin);
        let u = 2.0 * (sx - bin as Float) - 1.0;
        let py = (raster.y - image_center_y) * pixel_to_camera_y;
        let (d, dd_dx, dd_dy) = face.ray_direction(u, py, pixel_to_camera_x, pixel_to_camera_y, focal);

        // Normalize the direction jointly with its derivatives
        let dual = DualVector3::new(d, dd_dx, dd_dy).normalize();
        ray.d = dual.val;
        ray.dd_dx = dual.dx;
        ray.dd_dy = dual.dy;

        // Respect whatever clip range the host pre-populated
        ray.t_near = ray.t_near.max(SCALAR_EPS);
        ray.t_far = ray.t_far.min(BIG_SCALAR);
        ray.time = sample.time;

        *ray = self.camera_to_world.transform_ray(ray);
        true
    }

    fn object_to_screen(&self, opos: &Point3f, object_to_view: &Transform) -> Option<Point3f> {
        // Transform from object space to view space
        let v_pos = object_to_view.transform_point(opos);
        let v: Vector3f = Vector3f::from(v_pos);

        // Prevent an invalid projection
        if v.almost_zero(SCALAR_EPS) {
            return None;
        }

        let mut res_x = self.film.full_resolution.x as Float;
        let res_y = self.film.full_resolution.y as Float;
        let focal: Float = 1.0;
        let image_center_y = res_y * 0.5;
        let camera_to_pixel_y = -res_y / 2.0;
        if self.params.stereo {
            res_x *= 0.5;
        }

        let face = CubeFace::classify(&v);
        let s = face.to_face(&v);

        // Pinhole projection within the face, then place it in the strip
        let z = focal / s.z;
        let p_pos_x = res_x * ((0.5 - s.x * z * 0.5) + face.raster_offset()) / 6.0;
        if p_pos_x < 0.0 || p_pos_x > res_x {
            return None;
        }

        let p_pos_y = image_center_y - s.y * z * camera_to_pixel_y;
        if p_pos_y < 0.0 || p_pos_y > res_y {
            return None;
        }

        Some(Point3f::new(p_pos_x, p_pos_y, z))
    }

    fn support(&self, feature: Feature, params: &mut FeatureParams) -> bool {
        if feature == Feature::MultiViewRender {
            let res_x = self.film.full_resolution.x as Float;
            if self.params.stereo {
                params.image_subdiv.x = 12.0 / res_x;
            }
            else {
                params.image_subdiv.x = 6.0 / res_x;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{Point2f, Point2i};

    fn mono_camera(res_x: i32, res_y: i32) -> CubemapCamera {
        CubemapCamera::new(
            Transform::default(),
            Arc::new(Film::new(Point2i::new(res_x, res_y))),
            StereoParams{ stereo: false, eye_distance: 0.0 }
        )
    }

    fn stereo_camera(res_x: i32, res_y: i32) -> CubemapCamera {
        CubemapCamera::new(
            Transform::default(),
            Arc::new(Film::new(Point2i::new(res_x, res_y))),
            StereoParams::default()
        )
    }

    fn generate(camera: &CubemapCamera, x: Float, y: Float) -> Ray {
        let sample = CameraSample{
            p_film: Point2f::new(x, y),
            ..Default::default()
        };
        let mut ray = Ray::default();
        assert!(camera.generate_ray(&sample, &mut ray));
        ray
    }

    #[test]
    fn bins_select_the_expected_faces() {
        let camera = mono_camera(1200, 600);
        let expected = [
            CubeFace::PosX,
            CubeFace::NegX,
            CubeFace::PosY,
            CubeFace::NegY,
            CubeFace::NegZ,
            CubeFace::PosZ,
        ];
        for (k, face) in expected.iter().enumerate() {
            let x = 1200.0 * k as Float / 6.0 + 1200.0 / 12.0;
            let ray = generate(&camera, x, 300.0);
            assert_eq!(CubeFace::classify(&ray.d), *face, "bin {}", k);
            assert!((ray.d.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn face_centers_line_up_with_the_axes() {
        let camera = mono_camera(1200, 600);
        // Middle of the first bin looks straight down +X.
        let ray = generate(&camera, 100.0, 300.0);
        assert!((ray.d.x - 1.0).abs() < 1e-5);
        assert!(ray.d.y.abs() < 1e-5);
        assert!(ray.d.z.abs() < 1e-5);
    }

    #[test]
    fn projection_inverts_ray_generation_on_x_and_z_faces() {
        let camera = mono_camera(1200, 600);
        // One probe inside each of the +X, -X, -Z and +Z bins.
        for &(x, y) in &[
            (100.0, 300.0),
            (60.0, 220.0),
            (250.0, 150.0),
            (399.0, 400.0),
            (850.0, 333.0),
            (901.0, 90.0),
            (1050.0, 480.0),
            (1150.0, 300.0),
        ] {
            let ray = generate(&camera, x, y);
            let p = ray.point_at_time(2.0);
            let rpos = camera.object_to_screen(&p, &Transform::default()).unwrap();
            assert!((rpos.x - x).abs() < 1e-2, "x: {} vs {}", rpos.x, x);
            assert!((rpos.y - y).abs() < 1e-2, "y: {} vs {}", rpos.y, y);
        }
    }

    #[test]
    fn stereo_halves_offset_the_eyes() {
        let camera = stereo_camera(1200, 600);
        let left = generate(&camera, 100.0, 300.0);
        let right = generate(&camera, 700.0, 300.0);
        assert!((left.o.x - -2.5).abs() < 1e-5);
        assert!((right.o.x - 2.5).abs() < 1e-5);
    }

    #[test]
    fn tangents_stay_tangent_after_joint_normalization() {
        let camera = mono_camera(1200, 600);
        for &(x, y) in &[(77.0, 50.0), (430.0, 560.0), (1111.0, 299.0)] {
            let ray = generate(&camera, x, y);
            assert!((ray.d.length() - 1.0).abs() < 1e-5);
            assert!(ray.d.dot(&ray.dd_dx).abs() < 1e-5);
            assert!(ray.d.dot(&ray.dd_dy).abs() < 1e-5);
        }
    }

    #[test]
    fn seam_projections_stay_inside_the_frame() {
        let camera = mono_camera(1200, 600);
        // Directions on face edges and corners must either project inside
        // the frame or be rejected, never land outside it.
        let probes = [
            Vector3f::new(1.0, 1.0, 0.0),
            Vector3f::new(1.0, -1.0, 0.0),
            Vector3f::new(1.0, 0.0, 1.0),
            Vector3f::new(-1.0, 1.0, 1.0),
            Vector3f::new(1.0, 1.0, 1.0),
            Vector3f::new(0.0, -1.0, -1.0),
        ];
        for v in &probes {
            if let Some(rpos) = camera.object_to_screen(&Point3f::from(*v), &Transform::default()) {
                assert!(rpos.x >= 0.0 && rpos.x <= 1200.0);
                assert!(rpos.y >= 0.0 && rpos.y <= 600.0);
            }
        }
    }

    #[test]
    fn near_zero_points_fail_projection() {
        let camera = mono_camera(1200, 600);
        let p = Point3f::new(1e-5, 1e-5, -1e-5);
        assert!(camera.object_to_screen(&p, &Transform::default()).is_none());
    }

    #[test]
    fn multi_view_support_reports_subdivision() {
        let stereo = stereo_camera(1200, 600);
        let mut params = FeatureParams::default();
        assert!(stereo.support(Feature::MultiViewRender, &mut params));
        assert!((params.image_subdiv.x - 12.0 / 1200.0).abs() < 1e-9);

        let mono = mono_camera(1200, 600);
        let mut params = FeatureParams::default();
        assert!(mono.support(Feature::MultiViewRender, &mut params));
        assert!((params.image_subdiv.x - 6.0 / 1200.0).abs() < 1e-9);
    }

    #[test]
    fn stereo_projection_uses_half_frame() {
        let camera = stereo_camera(1200, 600);
        // Straight down +X lands mid way into the first bin of the half strip.
        let rpos = camera.object_to_screen(&Point3f::new(5.0, 0.0, 0.0), &Transform::default()).unwrap();
        assert!((rpos.x - 50.0).abs() < 1e-3);
        assert!((rpos.y - 300.0).abs() < 1e-3);
    }
}
