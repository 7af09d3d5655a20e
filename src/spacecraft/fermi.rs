use nalgebra::{UnitQuaternion, Vector3};

use crate::scene::{Artist, ArtistId, Frames, Scene, Shape, Style};

/// Rendered length of the spacecraft body axes, km. Large enough to read
/// against an orbit-scale view, small against the default extent.
pub const AXIS_LENGTH_KM: f64 = 2_000.0;

/// The Fermi spacecraft renderer: a position marker plus an oriented
/// body-axes triad, static at one instant or animated along a track.
///
/// Returned from the static plotting entry point so callers can keep
/// annotating the spacecraft afterwards.
#[derive(Debug, Clone)]
pub struct Fermi {
    quats: Vec<UnitQuaternion<f64>>,
    positions: Vec<Vector3<f64>>,
}

impl Fermi {
    /// One quaternion and position per animation frame; single-element
    /// inputs produce a static rendering.
    pub fn new(quats: Vec<UnitQuaternion<f64>>, positions: Vec<Vector3<f64>>) -> Self {
        Fermi { quats, positions }
    }

    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    pub fn n_frames(&self) -> usize {
        self.quats.len().min(self.positions.len())
    }

    /// Body axes as inertial-frame segments rooted at the spacecraft.
    fn axes_at(&self, frame: usize) -> Vec<[Vector3<f64>; 2]> {
        let q = self.quats[frame];
        let p = self.positions[frame];
        [Vector3::x(), Vector3::y(), Vector3::z()]
            .iter()
            .map(|axis| [p, p + (q * axis) * AXIS_LENGTH_KM])
            .collect()
    }

    /// Emit the spacecraft artists into `scene` and return their handles.
    pub fn plot(&self, scene: &mut Scene) -> Vec<ArtistId> {
        let n = self.n_frames();

        let marker_frames = if n == 1 {
            Frames::Static(Shape::Points(vec![self.positions[0]]))
        } else {
            Frames::Animated(
                (0..n)
                    .map(|i| Shape::Points(vec![self.positions[i]]))
                    .collect(),
            )
        };

        let axes_frames = if n == 1 {
            Frames::Static(Shape::Segments(self.axes_at(0)))
        } else {
            Frames::Animated((0..n).map(|i| Shape::Segments(self.axes_at(i))).collect())
        };

        let mut marker_style = Style::colored("#FFD700");
        marker_style.size = 4.0;

        vec![
            scene.add(Artist {
                label: "fermi".into(),
                style: marker_style,
                frames: marker_frames,
            }),
            scene.add(Artist {
                label: "fermi-axes".into(),
                style: Style::colored("#9DE0FF"),
                frames: axes_frames,
            }),
        ]
    }

    /// Add a labelled annotation marker near the spacecraft (e.g. an
    /// occultation note) to an existing scene.
    pub fn annotate(&self, scene: &mut Scene, label: &str, offset: Vector3<f64>) -> ArtistId {
        let anchor = self.positions[self.n_frames() - 1];
        scene.add(Artist {
            label: format!("note:{label}"),
            style: Style::colored("#FFFFFF"),
            frames: Frames::Static(Shape::Points(vec![anchor + offset])),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn static_fermi_emits_marker_and_axes() {
        let mut scene = Scene::dark("#01000F");
        let fermi = Fermi::new(
            vec![UnitQuaternion::identity()],
            vec![Vector3::new(7000.0, 0.0, 0.0)],
        );
        let ids = fermi.plot(&mut scene);
        assert_eq!(ids.len(), 2);
        assert_eq!(scene.artist(ids[0]).label, "fermi");
        assert_eq!(scene.artist(ids[1]).label, "fermi-axes");
        assert!(matches!(
            scene.artist(ids[1]).frames,
            Frames::Static(Shape::Segments(_))
        ));
    }

    #[test]
    fn animated_fermi_has_one_frame_per_sample() {
        let mut scene = Scene::dark("#01000F");
        let n = 10;
        let quats = vec![UnitQuaternion::identity(); n];
        let positions = (0..n)
            .map(|i| Vector3::new(7000.0, i as f64 * 10.0, 0.0))
            .collect();
        let ids = Fermi::new(quats, positions).plot(&mut scene);
        for id in ids {
            assert_eq!(scene.artist(id).frames.n_frames(), Some(n));
        }
    }

    #[test]
    fn axes_are_rooted_at_spacecraft_with_fixed_length() {
        let pos = Vector3::new(6900.0, 100.0, -50.0);
        let fermi = Fermi::new(vec![UnitQuaternion::identity()], vec![pos]);
        for seg in fermi.axes_at(0) {
            assert_eq!(seg[0], pos);
            assert_relative_eq!((seg[1] - seg[0]).norm(), AXIS_LENGTH_KM, epsilon = 1e-9);
        }
    }

    #[test]
    fn annotation_is_anchored_to_last_frame() {
        let mut scene = Scene::dark("#01000F");
        let fermi = Fermi::new(
            vec![UnitQuaternion::identity(); 2],
            vec![Vector3::zeros(), Vector3::new(1.0, 2.0, 3.0)],
        );
        let id = fermi.annotate(&mut scene, "grb", Vector3::new(0.0, 0.0, 100.0));
        match &scene.artist(id).frames {
            Frames::Static(Shape::Points(points)) => {
                assert_eq!(points[0], Vector3::new(1.0, 2.0, 103.0));
            }
            other => panic!("expected static points, got {other:?}"),
        }
    }
}
