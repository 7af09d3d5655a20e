use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Physical constants (all distances in km — GBM position histories are km)
// ---------------------------------------------------------------------------

pub const EARTH_RADIUS_KM: f64 = 6_371.0;
pub const MOON_RADIUS_KM: f64 = 1_737.4;
pub const SUN_RADIUS_KM: f64 = 696_340.0;

/// Mean Earth-Moon and Earth-Sun distances, km.
pub const MOON_DISTANCE_KM: f64 = 384_400.0;
pub const SUN_DISTANCE_KM: f64 = 1.495_978_707e8;

/// Seed value for the view-extent accumulator. A scene with nothing but the
/// spacecraft in it still gets a cube of this half-width.
pub const DEFAULT_EXTENT_KM: f64 = 15_000.0;

// ---------------------------------------------------------------------------
// View extent
// ---------------------------------------------------------------------------

/// Distance from the origin to the far edge of a body: Euclidean norm of its
/// center plus its radius. Sizes the view so the full silhouette fits.
pub fn compute_distance(x: f64, y: f64, z: f64, radius: f64) -> f64 {
    (x * x + y * y + z * z).sqrt() + radius
}

/// `compute_distance` for a position vector.
pub fn body_extent(pos: &Vector3<f64>, radius: f64) -> f64 {
    compute_distance(pos.x, pos.y, pos.z, radius)
}

// ---------------------------------------------------------------------------
// Time sampling
// ---------------------------------------------------------------------------

/// `n` evenly spaced values from `start` to `stop` inclusive.
/// `n = 1` yields just `start`; `n = 0` yields nothing.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
