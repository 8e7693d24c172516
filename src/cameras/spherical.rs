use crate::core::base::{Float, consts::{PI, FRAC_PI_2, INV_PI, INV_2_PI, SCALAR_EPS, BIG_SCALAR}};
use crate::core::geometry::{Vector3f, Point3f, Ray};
use crate::core::camera::{Camera, CameraSample, Feature, FeatureParams};
use crate::core::transform::Transform;
use crate::core::film::Film;
use crate::core::profiler::Profiler;
use super::StereoParams;
use std::sync::Arc;

/// An equirectangular panorama camera: raster X spans the full longitude
/// range, raster Y the full latitude range. With stereo enabled each
/// horizontal half of the frame renders one eye over the full panorama.
pub struct SphericalCamera {
    pub camera_to_world: Transform,
    pub film: Arc<Film>,
    pub clip_hither: Float,
    pub clip_yon: Float,
    params: StereoParams,
}

impl SphericalCamera {
    pub fn new(
        camera_to_world: Transform,
        film: Arc<Film>,
        clip_hither: Float,
        clip_yon: Float,
        params: StereoParams
    ) -> SphericalCamera {
        SphericalCamera{
            camera_to_world,
            film,
            clip_hither,
            clip_yon,
            params
        }
    }
}

impl Camera for SphericalCamera {
    fn film(&self) -> Arc<Film> {
        self.film.clone()
    }

    fn generate_ray(&self, sample: &CameraSample, ray: &mut Ray) -> bool {
        let _guard = Profiler::instance().profile("Camera::generate_ray()");
        let res_x = self.film.full_resolution.x as Float;
        let res_y = self.film.full_resolution.y as Float;
        let mut sx = num::clamp((sample.p_film.x / res_x) * 2.0 - 1.0, -1.0, 1.0);
        let sy = num::clamp((1.0 - sample.p_film.y / res_y) * 2.0 - 1.0, -1.0, 1.0);
        let mut dsx = 2.0 / res_x;
        let dsy = 2.0 / res_y;

        *ray = Ray::default();

        if self.params.stereo {
            // Each half of the frame covers the full longitude range for
            // one eye, so the horizontal pixel step doubles.
            if sx < 0.0 {
                sx = sx * 2.0 + 1.0;
                ray.o.x -= 0.5 * self.params.eye_distance;
            }
            else {
                sx = sx * 2.0 - 1.0;
                ray.o.x += 0.5 * self.params.eye_distance;
            }
            dsx *= 2.0;
        }

        // Compute spherical projection
        let theta = PI * sx;
        let phi = FRAC_PI_2 * sy;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();

        ray.d = Vector3f::new(sin_theta * cos_phi, sin_phi, -cos_theta * cos_phi);
        // Derivative with respect to raster X
        ray.dd_dx = Vector3f::new(cos_theta, 0.0, sin_theta) * (PI * cos_phi * dsx);
        // Derivative with respect to raster Y
        ray.dd_dy = Vector3f::new(-sin_theta * sin_phi, cos_phi, cos_theta * sin_phi) * (FRAC_PI_2 * dsy);

        ray.t_near = self.clip_hither.max(SCALAR_EPS);
        ray.t_far = self.clip_yon.min(BIG_SCALAR);
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
        if self.params.stereo {
            res_x *= 0.5;
        }

        // Project from view space to screen space
        let depth = v.length();
        let dir = v / depth;
        let theta = dir.x.atan2(-dir.z);
        let phi = num::clamp(dir.y, -1.0, 1.0).asin();
        Some(Point3f::new(
            (theta * INV_2_PI + 0.5) * res_x,
            (1.0 - (phi * INV_PI + 0.5)) * res_y,
            depth
        ))
    }

    fn support(&self, feature: Feature, params: &mut FeatureParams) -> bool {
        if feature == Feature::MultiViewRender && self.params.stereo {
            let res_x = self.film.full_resolution.x as Float;
            params.image_subdiv.x = 2.0 / res_x;
        }
        true
    }
}
