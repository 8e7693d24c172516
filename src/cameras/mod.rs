use crate::core::base::Float;

pub mod standard;
pub use standard::*;
pub mod dof;
pub use dof::*;
pub mod spherical;
pub use spherical::*;
pub mod cubemap;
pub use cubemap::*;

/// Evaluated stereo parameters shared by the panorama camera models. The
/// frame splits into two horizontal halves, one per eye, with the ray
/// origins pushed apart laterally by `eye_distance`.
#[derive(Debug, Copy, Clone)]
pub struct StereoParams {
    pub stereo: bool,
    pub eye_distance: Float,
}

impl Default for StereoParams {
    fn default() -> Self {
        StereoParams{
            stereo: true,
            eye_distance: 5.0
        }
    }
}
