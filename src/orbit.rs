use nalgebra::{UnitQuaternion, Vector3};

use crate::interp::{InterpError, OrbitSample, PositionHistory};

// ---------------------------------------------------------------------------
// Earth gravity in km units (ECI frame)
// ---------------------------------------------------------------------------

pub const MU_EARTH_KM: f64 = 3.986_004_418e5; // km^3/s^2
pub const R_EARTH_EQ_KM: f64 = 6_378.137;
pub const J2_EARTH: f64 = 1.082_63e-3;

/// Point-mass gravitational acceleration, km/s^2.
pub fn gravity_pointmass(pos: &Vector3<f64>) -> Vector3<f64> {
    let r = pos.norm();
    if r < 1.0 {
        return Vector3::zeros();
    }
    -MU_EARTH_KM / (r * r * r) * pos
}

/// Gravitational acceleration with the J2 oblateness term, km/s^2.
pub fn gravity_j2(pos: &Vector3<f64>) -> Vector3<f64> {
    let r = pos.norm();
    if r < 1.0 {
        return Vector3::zeros();
    }
    let r2 = r * r;
    let z2 = pos.z * pos.z;

    let mu_over_r3 = MU_EARTH_KM / (r2 * r);
    let j2_coeff = 1.5 * J2_EARTH * R_EARTH_EQ_KM * R_EARTH_EQ_KM / r2;

    let xy_factor = mu_over_r3 * (1.0 + j2_coeff * (1.0 - 5.0 * z2 / r2));
    let z_factor = mu_over_r3 * (1.0 + j2_coeff * (3.0 - 5.0 * z2 / r2));

    Vector3::new(-xy_factor * pos.x, -xy_factor * pos.y, -z_factor * pos.z)
}

// ---------------------------------------------------------------------------
// RK4 propagation
// ---------------------------------------------------------------------------

/// Position/velocity pair along a propagated orbit (km, km/s, ECI).
#[derive(Debug, Clone)]
pub struct OrbitState {
    pub time: f64,
    pub pos: Vector3<f64>,
    pub vel: Vector3<f64>,
}

fn rk4_step(
    state: &OrbitState,
    dt: f64,
    accel: &dyn Fn(&Vector3<f64>) -> Vector3<f64>,
) -> OrbitState {
    let deriv = |pos: &Vector3<f64>, vel: &Vector3<f64>| (*vel, accel(pos));

    let (k1_dr, k1_dv) = deriv(&state.pos, &state.vel);
    let (k2_dr, k2_dv) = deriv(
        &(state.pos + k1_dr * dt * 0.5),
        &(state.vel + k1_dv * dt * 0.5),
    );
    let (k3_dr, k3_dv) = deriv(
        &(state.pos + k2_dr * dt * 0.5),
        &(state.vel + k2_dv * dt * 0.5),
    );
    let (k4_dr, k4_dv) = deriv(&(state.pos + k3_dr * dt), &(state.vel + k3_dv * dt));

    OrbitState {
        time: state.time + dt,
        pos: state.pos + (k1_dr + 2.0 * k2_dr + 2.0 * k3_dr + k4_dr) * (dt / 6.0),
        vel: state.vel + (k1_dv + 2.0 * k2_dv + 2.0 * k3_dv + k4_dv) * (dt / 6.0),
    }
}

/// Propagate an orbit, sampling every `dt` seconds for `duration` seconds.
pub fn propagate(initial: &OrbitState, dt: f64, duration: f64, use_j2: bool) -> Vec<OrbitState> {
    let accel: &dyn Fn(&Vector3<f64>) -> Vector3<f64> =
        if use_j2 { &gravity_j2 } else { &gravity_pointmass };

    let n_steps = (duration / dt) as usize;
    let mut trajectory = Vec::with_capacity(n_steps + 1);
    let mut state = initial.clone();
    trajectory.push(state.clone());

    for _ in 0..n_steps {
        state = rk4_step(&state, dt, accel);
        trajectory.push(state.clone());
    }

    trajectory
}

// ---------------------------------------------------------------------------
// History synthesis
// ---------------------------------------------------------------------------

/// Zenith-pointing attitude: spacecraft +Z along the outward radial.
fn zenith_attitude(pos: &Vector3<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::rotation_between(&Vector3::z(), &pos.normalize())
        .unwrap_or_else(UnitQuaternion::identity)
}

/// Build a circular-orbit position history suitable for the plotting entry
/// points: zenith-pointing attitude, slowly advancing sun/moon directions at
/// their mean distances, and optional inactive time windows (stand-in for
/// SAA passages).
pub fn circular_orbit_history(
    altitude_km: f64,
    inclination_deg: f64,
    duration_s: f64,
    dt: f64,
    inactive_windows: &[(f64, f64)],
) -> Result<PositionHistory, InterpError> {
    let r = R_EARTH_EQ_KM + altitude_km;
    let v = (MU_EARTH_KM / r).sqrt();
    let inc = inclination_deg.to_radians();

    let initial = OrbitState {
        time: 0.0,
        pos: Vector3::new(r, 0.0, 0.0),
        vel: Vector3::new(0.0, v * inc.cos(), v * inc.sin()),
    };

    // Mean motions of the apparent sun/moon directions, rad/s
    let sun_rate = 2.0 * std::f64::consts::PI / (365.25 * 86_400.0);
    let moon_rate = 2.0 * std::f64::consts::PI / (27.32 * 86_400.0);

    let samples = propagate(&initial, dt, duration_s, true)
        .into_iter()
        .map(|state| {
            let sun_angle = sun_rate * state.time;
            let moon_angle = moon_rate * state.time;
            let active = !inactive_windows
                .iter()
                .any(|&(start, stop)| state.time >= start && state.time < stop);
            OrbitSample {
                time: state.time,
                quat: zenith_attitude(&state.pos),
                sun: Vector3::new(sun_angle.cos(), sun_angle.sin(), 0.0)
                    * crate::geometry::SUN_DISTANCE_KM,
                moon: Vector3::new(moon_angle.cos(), moon_angle.sin(), 0.0)
                    * crate::geometry::MOON_DISTANCE_KM,
                sc_pos: state.pos,
                active,
            }
        })
        .collect();

    PositionHistory::new(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::PositionInterpolator;

    #[test]
    fn circular_orbit_stays_circular() {
        let r = R_EARTH_EQ_KM + 550.0;
        let v = (MU_EARTH_KM / r).sqrt();
        let initial = OrbitState {
            time: 0.0,
            pos: Vector3::new(r, 0.0, 0.0),
            vel: Vector3::new(0.0, v, 0.0),
        };

        let period = 2.0 * std::f64::consts::PI * (r.powi(3) / MU_EARTH_KM).sqrt();
        let traj = propagate(&initial, 1.0, period, false);
        let last = traj.last().unwrap();

        let pos_error = (last.pos - initial.pos).norm();
        let circumference = 2.0 * std::f64::consts::PI * r;
        assert!(
            pos_error / circumference < 2e-4,
            "relative closure error {:.2e}",
            pos_error / circumference
        );
    }

    #[test]
    fn j2_reduces_to_pointmass_at_equator() {
        let pos = Vector3::new(R_EARTH_EQ_KM + 550.0, 0.0, 0.0);
        let diff = (gravity_j2(&pos) - gravity_pointmass(&pos)).norm()
            / gravity_pointmass(&pos).norm();
        assert!(diff < 0.01, "J2 correction should be <1% at LEO, got {diff:.4}");
    }

    #[test]
    fn history_covers_duration_and_flags_windows() {
        let hist = circular_orbit_history(550.0, 25.6, 600.0, 10.0, &[(100.0, 200.0)]).unwrap();
        let (tmin, tmax) = hist.minmax_time();
        assert_eq!(tmin, 0.0);
        assert!((tmax - 600.0).abs() < 1e-9);
        assert!(hist.is_active(50.0));
        assert!(!hist.is_active(150.0));
        assert!(hist.is_active(250.0));
    }

    #[test]
    fn zenith_attitude_points_radially() {
        let hist = circular_orbit_history(550.0, 25.6, 300.0, 10.0, &[]).unwrap();
        let t = 120.0;
        let pos = hist.sc_pos(t);
        let z_inertial = hist.quaternion(t) * Vector3::z();
        let cos = z_inertial.dot(&pos.normalize());
        // Slerp between nearby attitudes keeps the axis close to radial
        assert!(cos > 0.999, "zenith axis drifted, cos = {cos}");
    }
}
