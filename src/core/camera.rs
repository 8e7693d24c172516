use super::base::Float;
use super::geometry::{Point2f, Point3f, Ray, Vector2f, Bounds3f};
use super::transform::Transform;
use super::film::Film;
use std::fmt;
use std::sync::Arc;

/// Renderer capabilities a host can query a camera model for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Feature {
    /// Rendering more than one view into a single frame (stereo panoramas,
    /// face strips). Supporting cameras write their image subdivision into
    /// the query params.
    MultiViewRender,
}

/// Write-back storage for a [`Camera::support`] query.
#[derive(Debug, Default, Copy, Clone)]
pub struct FeatureParams {
    /// Horizontal/vertical fraction of the frame covered by one tile of
    /// the projection.
    pub image_subdiv: Vector2f,
}

pub trait Camera: Send + Sync {
    /// The film this camera exposes.
    fn film(&self) -> Arc<Film>;

    /// Produce the world-space ray and raster footprint for one image
    /// sample. Returns false when the sample yields no usable ray.
    fn generate_ray(&self, sample: &CameraSample, ray: &mut Ray) -> bool;

    /// Project an object-space point onto the raster. `None` means the
    /// point is not visible from this camera, which callers must not treat
    /// as a fault. The returned point carries raster x, raster y and the
    /// projection depth.
    fn object_to_screen(&self, opos: &Point3f, object_to_view: &Transform) -> Option<Point3f>;

    /// Ask whether this camera model supports a capability; supporting
    /// models may write capability data back into `params`.
    fn support(&self, _feature: Feature, _params: &mut FeatureParams) -> bool {
        true
    }

    /// Let the camera react to the scene's world-space extents.
    fn update_world_bbox(&self, _world_bbox: &Bounds3f) {}
}

/// One image sample: the raster position plus the fresh uniform pair the
/// lens sampler handed out for it.
#[derive(Default, Debug, Copy, Clone)]
pub struct CameraSample {
    pub p_film: Point2f,
    pub p_lens: Point2f,
    pub time: Float
}

impl fmt::Display for CameraSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ p_film: {}, p_lens: {}, time {} ]", self.p_film, self.p_lens, self.time)
    }
}
