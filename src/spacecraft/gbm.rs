use nalgebra::{UnitQuaternion, Vector3};

// ---------------------------------------------------------------------------
// Detector geometry
//
// Boresight azimuth/zenith angles in the spacecraft frame for the twelve
// NaI detectors (n0..nb) and the two BGO detectors (b0, b1), from the GBM
// instrument paper (Meegan et al. 2009).
// ---------------------------------------------------------------------------

/// One GBM detector: identifier code and boresight orientation in the
/// spacecraft frame.
#[derive(Debug, Clone, Copy)]
pub struct Detector {
    pub id: &'static str,
    pub azimuth_deg: f64,
    pub zenith_deg: f64,
}

impl Detector {
    /// Boresight unit vector in the spacecraft frame.
    pub fn body_direction(&self) -> Vector3<f64> {
        let az = self.azimuth_deg.to_radians();
        let zen = self.zenith_deg.to_radians();
        Vector3::new(zen.sin() * az.cos(), zen.sin() * az.sin(), zen.cos())
    }
}

pub const DETECTORS: [Detector; 14] = [
    Detector { id: "n0", azimuth_deg: 45.89, zenith_deg: 20.58 },
    Detector { id: "n1", azimuth_deg: 45.11, zenith_deg: 45.31 },
    Detector { id: "n2", azimuth_deg: 58.44, zenith_deg: 90.21 },
    Detector { id: "n3", azimuth_deg: 314.87, zenith_deg: 45.24 },
    Detector { id: "n4", azimuth_deg: 303.15, zenith_deg: 90.27 },
    Detector { id: "n5", azimuth_deg: 3.35, zenith_deg: 89.79 },
    Detector { id: "n6", azimuth_deg: 224.93, zenith_deg: 20.43 },
    Detector { id: "n7", azimuth_deg: 224.62, zenith_deg: 46.18 },
    Detector { id: "n8", azimuth_deg: 236.61, zenith_deg: 89.97 },
    Detector { id: "n9", azimuth_deg: 135.19, zenith_deg: 45.55 },
    Detector { id: "na", azimuth_deg: 123.73, zenith_deg: 90.42 },
    Detector { id: "nb", azimuth_deg: 183.74, zenith_deg: 90.32 },
    Detector { id: "b0", azimuth_deg: 0.00, zenith_deg: 90.00 },
    Detector { id: "b1", azimuth_deg: 180.00, zenith_deg: 90.00 },
];

// ---------------------------------------------------------------------------
// GBM at a given attitude
// ---------------------------------------------------------------------------

/// The detector set at a given spacecraft position and attitude. The
/// attitude can be updated frame by frame while animating.
#[derive(Debug, Clone)]
pub struct Gbm {
    quat: UnitQuaternion<f64>,
    sc_pos: Vector3<f64>,
}

impl Gbm {
    pub fn new(quat: UnitQuaternion<f64>, sc_pos: Vector3<f64>) -> Self {
        Gbm { quat, sc_pos }
    }

    pub fn set_quaternion(&mut self, quat: UnitQuaternion<f64>) {
        self.quat = quat;
    }

    pub fn sc_pos(&self) -> Vector3<f64> {
        self.sc_pos
    }

    /// Detector code and inertial-frame boresight unit vector, in the fixed
    /// table order.
    pub fn pointings(&self) -> impl Iterator<Item = (&'static str, Vector3<f64>)> + '_ {
        DETECTORS
            .iter()
            .map(move |det| (det.id, self.quat * det.body_direction()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn boresights_are_unit_vectors() {
        for det in DETECTORS {
            assert_relative_eq!(det.body_direction().norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn bgo_boresights_oppose_along_x() {
        let b0 = DETECTORS.iter().find(|d| d.id == "b0").unwrap();
        let b1 = DETECTORS.iter().find(|d| d.id == "b1").unwrap();
        assert_relative_eq!(b0.body_direction().x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(b1.body_direction().x, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn identity_attitude_keeps_body_frame() {
        let gbm = Gbm::new(UnitQuaternion::identity(), Vector3::new(7000.0, 0.0, 0.0));
        for (id, pointing) in gbm.pointings() {
            let det = DETECTORS.iter().find(|d| d.id == id).unwrap();
            assert_relative_eq!(
                (pointing - det.body_direction()).norm(),
                0.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn attitude_rotates_pointings() {
        let quat =
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2);
        let mut gbm = Gbm::new(UnitQuaternion::identity(), Vector3::zeros());
        gbm.set_quaternion(quat);
        let (_, b0) = gbm.pointings().find(|(id, _)| *id == "b0").unwrap();
        // b0 looks along +X in the body frame; a 90 deg yaw sends it to +Y
        assert_relative_eq!(b0.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(b0.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn fourteen_detectors_in_fixed_order() {
        assert_eq!(DETECTORS.len(), 14);
        assert_eq!(DETECTORS[0].id, "n0");
        assert_eq!(DETECTORS[13].id, "b1");
    }
}
