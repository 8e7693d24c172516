use super::base::Float;
use super::geometry::Point2i;

/// The image plane a camera exposes onto. Pixel storage and
/// reconstruction filtering live host-side; cameras only need the raster
/// dimensions.
#[derive(Debug, Copy, Clone)]
pub struct Film {
    pub full_resolution: Point2i,
}

impl Film {
    pub fn new(full_resolution: Point2i) -> Film {
        if full_resolution.x <= 0 || full_resolution.y <= 0 {
            warn!("film resolution {} is not positive", full_resolution);
        }
        Film{
            full_resolution
        }
    }

    /// Width over height of the full raster.
    pub fn aspect_ratio(&self) -> Float {
        self.full_resolution.x as Float / self.full_resolution.y as Float
    }
}
