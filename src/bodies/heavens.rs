use nalgebra::Vector3;
use rand::Rng;

use crate::geometry::{MOON_RADIUS_KM, SUN_RADIUS_KM};
use crate::scene::{Artist, ArtistId, Frames, Scene, Shape, Style};

// ---------------------------------------------------------------------------
// Orbs: one position for a static scene, a position track for an animation
// ---------------------------------------------------------------------------

fn orb_frames(track: &[Vector3<f64>], radius: f64) -> Frames {
    if track.len() == 1 {
        Frames::Static(Shape::Orb {
            center: track[0],
            radius,
        })
    } else {
        Frames::Animated(
            track
                .iter()
                .map(|center| Shape::Orb {
                    center: *center,
                    radius,
                })
                .collect(),
        )
    }
}

/// The Sun.
#[derive(Debug, Clone)]
pub struct Sol {
    track: Vec<Vector3<f64>>,
}

impl Sol {
    /// `track` holds one position per animation frame (or a single position
    /// for a static scene), km.
    pub fn new(track: Vec<Vector3<f64>>) -> Self {
        Sol { track }
    }

    pub fn radius(&self) -> f64 {
        SUN_RADIUS_KM
    }

    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.track
    }

    pub fn plot(&self, scene: &mut Scene) -> ArtistId {
        scene.add(Artist {
            label: "sun".into(),
            style: Style::colored("#FFDB4D"),
            frames: orb_frames(&self.track, self.radius()),
        })
    }
}

/// The Moon.
#[derive(Debug, Clone)]
pub struct Moon {
    track: Vec<Vector3<f64>>,
}

impl Moon {
    pub fn new(track: Vec<Vector3<f64>>) -> Self {
        Moon { track }
    }

    pub fn radius(&self) -> f64 {
        MOON_RADIUS_KM
    }

    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.track
    }

    pub fn plot(&self, scene: &mut Scene) -> ArtistId {
        scene.add(Artist {
            label: "moon".into(),
            style: Style::colored("#B8B8B8"),
            frames: orb_frames(&self.track, self.radius()),
        })
    }
}

// ---------------------------------------------------------------------------
// Starfield
// ---------------------------------------------------------------------------

/// Decorative background stars scattered on a shell just inside the view
/// bound, so they never drive the axis limit themselves.
#[derive(Debug, Clone)]
pub struct StarField {
    n_stars: usize,
    distance: f64,
}

impl StarField {
    pub fn new(n_stars: usize, distance: f64) -> Self {
        StarField { n_stars, distance }
    }

    pub fn plot(&self, scene: &mut Scene) -> ArtistId {
        let mut rng = rand::thread_rng();
        let points = (0..self.n_stars)
            .map(|_| random_unit(&mut rng) * self.distance)
            .collect();
        let mut style = Style::colored("#FFFFFF");
        style.size = 0.5;
        scene.add(Artist {
            label: "stars".into(),
            style,
            frames: Frames::Static(Shape::Points(points)),
        })
    }
}

/// Uniform random direction (rejection sampling in the unit ball).
fn random_unit(rng: &mut impl Rng) -> Vector3<f64> {
    loop {
        let v = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let norm = v.norm();
        if norm > 1e-3 && norm <= 1.0 {
            return v / norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_position_yields_static_orb() {
        let mut scene = Scene::dark("#01000F");
        let sol = Sol::new(vec![Vector3::new(1.0e8, 0.0, 0.0)]);
        let id = sol.plot(&mut scene);
        assert!(matches!(
            scene.artist(id).frames,
            Frames::Static(Shape::Orb { .. })
        ));
        assert_eq!(sol.radius(), SUN_RADIUS_KM);
    }

    #[test]
    fn track_yields_one_orb_per_frame() {
        let mut scene = Scene::dark("#01000F");
        let track: Vec<_> = (0..5)
            .map(|i| Vector3::new(3.8e5, i as f64, 0.0))
            .collect();
        let id = Moon::new(track).plot(&mut scene);
        assert_eq!(scene.artist(id).frames.n_frames(), Some(5));
    }

    #[test]
    fn starfield_scatters_on_shell() {
        let mut scene = Scene::dark("#01000F");
        let id = StarField::new(50, 14_998.0).plot(&mut scene);
        match &scene.artist(id).frames {
            Frames::Static(Shape::Points(points)) => {
                assert_eq!(points.len(), 50);
                for p in points {
                    assert_relative_eq!(p.norm(), 14_998.0, epsilon = 1e-6);
                }
            }
            other => panic!("expected static points, got {other:?}"),
        }
    }
}
