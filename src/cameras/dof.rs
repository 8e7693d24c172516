use crate::core::base::Float;
use crate::core::geometry::{Vector3f, Point3f, Ray, Bounds3f};
use crate::core::camera::{Camera, CameraSample, Feature, FeatureParams};
use crate::core::transform::Transform;
use crate::core::film::Film;
use crate::core::sampling::sample_aperture;
use crate::core::profiler::Profiler;
use super::StandardCamera;
use std::sync::Arc;

/// Evaluated node parameters for the depth of field camera.
#[derive(Debug, Copy, Clone)]
pub struct DofParams {
    /// Aperture diameter; 0 degenerates to a pinhole.
    pub fstop: Float,
    /// Distance of the plane in perfect focus.
    pub fplane: Float,
    /// Iris blade count; below 3 the iris is circular.
    pub blades: i32,
    /// Iris rotation in radians.
    pub rotation: Float,
}

impl Default for DofParams {
    fn default() -> Self {
        DofParams{
            fstop: 1.0,
            fplane: 1.0,
            blades: 6,
            rotation: 0.0
        }
    }
}

/// A thin lens wrapped around the standard projective camera.
///
/// The wrapped camera produces the pinhole ray; this model then moves the
/// origin to a sampled point on the aperture and bends the direction so
/// every ray for the pixel crosses the pinhole ray's point on the focal
/// plane. Orthographic projections have no lens and pass through
/// untouched.
pub struct DofCamera {
    inner: StandardCamera,
    params: DofParams,
}

impl DofCamera {
    pub fn new(inner: StandardCamera, params: DofParams) -> DofCamera {
        DofCamera{
            inner,
            params
        }
    }

    pub fn inner(&self) -> &StandardCamera {
        &self.inner
    }
}

impl Camera for DofCamera {
    fn film(&self) -> Arc<Film> {
        self.inner.film()
    }

    fn generate_ray(&self, sample: &CameraSample, ray: &mut Ray) -> bool {
        let _guard = Profiler::instance().profile("Camera::generate_ray()");
        if !self.inner.generate_camera_ray(sample, ray) {
            return false;
        }

        if self.inner.is_perspective() {
            let lens = sample_aperture(&sample.p_lens, self.params.blades, self.params.rotation);

            // The aperture sample becomes the origin on the lens plane...
            ray.o = Point3f::new(
                lens.x * self.params.fstop * 0.5,
                lens.y * self.params.fstop * 0.5,
                0.0
            );
            // ...and the direction re-aims at the pinhole ray's point on
            // the plane of focus.
            let focus = ray.d * (self.params.fplane / ray.d.z.abs());
            ray.d = (focus - Vector3f::from(ray.o)).normalize();
        }

        self.inner.ray_to_world(ray);
        true
    }

    fn object_to_screen(&self, opos: &Point3f, object_to_view: &Transform) -> Option<Point3f> {
        self.inner.object_to_screen(opos, object_to_view)
    }

    fn support(&self, feature: Feature, params: &mut FeatureParams) -> bool {
        self.inner.support(feature, params)
    }

    fn update_world_bbox(&self, world_bbox: &Bounds3f) {
        self.inner.update_world_bbox(world_bbox)
    }
}
