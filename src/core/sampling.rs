//! 2D sampling routines for lens apertures.

use super::base::{Float, consts::{PI, FRAC_PI_4}};
use super::geometry::{Point2f, Vector3f};

/// Map a uniform sample on the unit square onto the unit disk with the
/// concentric squeeze mapping. Low distortion and area preserving; the
/// piecewise theta keeps the mapping continuous across the four corner
/// regions and never divides by a vanishing radius.
pub fn concentric_sample_disk(u: &Point2f) -> Point2f {
    // Map uniform random numbers to [-1,1]^2
    let sx = 2.0 * u.x - 1.0;
    let sy = 2.0 * u.y - 1.0;

    // Handle degeneracy at the origin
    if sx == 0.0 && sy == 0.0 {
        return Point2f::default();
    }

    let r: Float;
    let mut theta: Float;
    if sx >= -sy {
        if sx > sy {
            r = sx;
            theta = if sy > 0.0 { sy / r } else { 8.0 + sy / r };
        }
        else {
            r = sy;
            theta = 2.0 - sx / r;
        }
    }
    else if sx <= sy {
        r = -sx;
        theta = 4.0 - sy / r;
    }
    else {
        r = -sy;
        theta = 6.0 + sx / r;
    }
    theta *= FRAC_PI_4;
    Point2f::new(r * theta.cos(), r * theta.sin())
}

/// Uniformly sample over the unit triangle, returning all three
/// barycentric coordinates.
pub fn uniform_sample_triangle(u: &Point2f) -> Vector3f {
    let su0 = u.x.sqrt();
    let b0 = 1.0 - su0;
    let b1 = u.y * su0;
    Vector3f::new(b0, b1, 1.0 - b0 - b1)
}

/// Uniformly sample the interior of a regular polygon with `blades`
/// vertices on the unit circle, rotated by `rotation` radians. The
/// polygon decomposes into `blades` origin-anchored triangles; u.x picks
/// the wedge and is remapped for the triangle sample. The 0.99999 factor
/// keeps the wedge index below `blades` when u.x rounds up to 1.
pub fn uniform_sample_poly_disk(u: &Point2f, blades: i32, rotation: Float) -> Point2f {
    let count = if blades < 3 { 3 } else { blades };

    let i = (count as Float * u.x * 0.99999) as i32;
    let u1 = u.x * count as Float - i as Float;

    let t0 = i as Float / count as Float * (2.0 * PI);
    let t1 = (i + 1) as Float / count as Float * (2.0 * PI);

    let x0 = (t0 + rotation).cos();
    let y0 = (t0 + rotation).sin();
    let x1 = (t1 + rotation).cos();
    let y1 = (t1 + rotation).sin();

    let bary = uniform_sample_triangle(&Point2f::new(u1, u.y));

    Point2f::new(x0 * bary.x + x1 * bary.y, y0 * bary.x + y1 * bary.y)
}

/// Sample a point on the aperture shape for a depth of field ray origin:
/// fewer than 3 blades means a circular iris, otherwise a regular
/// `blades`-gon.
pub fn sample_aperture(u: &Point2f, blades: i32, rotation: Float) -> Point2f {
    if blades < 3 {
        concentric_sample_disk(u)
    }
    else {
        uniform_sample_poly_disk(u, blades, rotation)
    }
}
