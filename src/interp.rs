use nalgebra::{UnitQuaternion, Vector3};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Position interpolator capability
// ---------------------------------------------------------------------------

/// Time-parametrized spacecraft state and ephemeris queries.
///
/// Every position is in km. Queries outside `minmax_time()` clamp to the
/// nearest bound. The plotting entry points only consume this trait, so
/// tests can substitute fixed-value stubs.
pub trait PositionInterpolator {
    /// Spacecraft position at `t`.
    fn sc_pos(&self, t: f64) -> Vector3<f64>;

    /// Spacecraft attitude at `t` (spacecraft frame → inertial).
    fn quaternion(&self, t: f64) -> UnitQuaternion<f64>;

    /// Sun position at `t`.
    fn sun_position(&self, t: f64) -> Vector3<f64>;

    /// Moon position at `t`.
    fn moon_position(&self, t: f64) -> Vector3<f64>;

    /// Whether the instruments were taking data at `t` (false during SAA
    /// passages and slews).
    fn is_active(&self, t: f64) -> bool;

    /// Valid time range `(t_min, t_max)`.
    fn minmax_time(&self) -> (f64, f64);
}

// ---------------------------------------------------------------------------
// Sampled history + linear/slerp interpolation
// ---------------------------------------------------------------------------

/// One row of a position history.
#[derive(Debug, Clone)]
pub struct OrbitSample {
    pub time: f64,
    pub sc_pos: Vector3<f64>,       // km, ECI
    pub quat: UnitQuaternion<f64>,  // spacecraft → inertial
    pub sun: Vector3<f64>,          // km
    pub moon: Vector3<f64>,         // km
    pub active: bool,
}

#[derive(Debug, Error)]
pub enum InterpError {
    #[error("position history is empty")]
    Empty,
    #[error("sample times must be strictly increasing (violated at sample {index})")]
    NonMonotonic { index: usize },
}

/// Interpolating view over a sampled history: piecewise-linear positions
/// and ephemerides, slerp attitude, step-function activity flag.
#[derive(Debug, Clone)]
pub struct PositionHistory {
    samples: Vec<OrbitSample>,
}

impl PositionHistory {
    /// Wrap a non-empty, strictly time-ascending sample list.
    pub fn new(samples: Vec<OrbitSample>) -> Result<Self, InterpError> {
        if samples.is_empty() {
            return Err(InterpError::Empty);
        }
        for (i, pair) in samples.windows(2).enumerate() {
            if pair[1].time <= pair[0].time {
                return Err(InterpError::NonMonotonic { index: i + 1 });
            }
        }
        Ok(PositionHistory { samples })
    }

    pub fn samples(&self) -> &[OrbitSample] {
        &self.samples
    }

    /// Bracketing segment for `t`: indices of the two neighbors and the
    /// blend factor in [0, 1]. Clamps outside the sampled range.
    fn bracket(&self, t: f64) -> (usize, usize, f64) {
        let n = self.samples.len();
        if t <= self.samples[0].time {
            return (0, 0, 0.0);
        }
        if t >= self.samples[n - 1].time {
            return (n - 1, n - 1, 0.0);
        }
        // First sample strictly after t; the one before is <= t.
        let hi = self.samples.partition_point(|s| s.time <= t);
        let lo = hi - 1;
        let t0 = self.samples[lo].time;
        let t1 = self.samples[hi].time;
        (lo, hi, (t - t0) / (t1 - t0))
    }

    fn lerp(&self, t: f64, field: impl Fn(&OrbitSample) -> Vector3<f64>) -> Vector3<f64> {
        let (lo, hi, alpha) = self.bracket(t);
        field(&self.samples[lo]).lerp(&field(&self.samples[hi]), alpha)
    }
}

impl PositionInterpolator for PositionHistory {
    fn sc_pos(&self, t: f64) -> Vector3<f64> {
        self.lerp(t, |s| s.sc_pos)
    }

    fn quaternion(&self, t: f64) -> UnitQuaternion<f64> {
        let (lo, hi, alpha) = self.bracket(t);
        self.samples[lo]
            .quat
            .try_slerp(&self.samples[hi].quat, alpha, 1e-9)
            // Antipodal attitudes have no unique geodesic; hold the earlier one.
            .unwrap_or(self.samples[lo].quat)
    }

    fn sun_position(&self, t: f64) -> Vector3<f64> {
        self.lerp(t, |s| s.sun)
    }

    fn moon_position(&self, t: f64) -> Vector3<f64> {
        self.lerp(t, |s| s.moon)
    }

    fn is_active(&self, t: f64) -> bool {
        let (lo, _, _) = self.bracket(t);
        self.samples[lo].active
    }

    fn minmax_time(&self) -> (f64, f64) {
        (
            self.samples[0].time,
            self.samples[self.samples.len() - 1].time,
        )
    }
}
