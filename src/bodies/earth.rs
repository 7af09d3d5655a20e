use nalgebra::Vector3;

use crate::geometry::EARTH_RADIUS_KM;
use crate::scene::{Artist, ArtistId, Frames, Scene, Shape, Style};

/// Which hemisphere shading to use for the Earth orb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarthTime {
    Day,
    Night,
}

/// The Earth, always centered at the scene origin (positions are
/// geocentric). Purely static; it never joins the animation set.
#[derive(Debug, Clone)]
pub struct Earth {
    time: EarthTime,
    realistic: bool,
}

impl Earth {
    pub fn new(time: EarthTime, realistic: bool) -> Self {
        Earth { time, realistic }
    }

    pub fn radius(&self) -> f64 {
        EARTH_RADIUS_KM
    }

    pub fn plot(&self, scene: &mut Scene) -> ArtistId {
        let color = match (self.realistic, self.time) {
            (true, EarthTime::Day) => "#2E6F9E",
            (true, EarthTime::Night) => "#0A1A4A",
            // Flat shading ignores the day/night split
            (false, _) => "#546E9C",
        };
        scene.add(Artist {
            label: "earth".into(),
            style: Style::colored(color),
            frames: Frames::Static(Shape::Orb {
                center: Vector3::zeros(),
                radius: self.radius(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_is_a_static_orb_at_origin() {
        let mut scene = Scene::dark("#01000F");
        let id = Earth::new(EarthTime::Night, true).plot(&mut scene);
        let artist = scene.artist(id);
        assert_eq!(artist.label, "earth");
        match &artist.frames {
            Frames::Static(Shape::Orb { center, radius }) => {
                assert_eq!(*center, Vector3::zeros());
                assert_eq!(*radius, EARTH_RADIUS_KM);
            }
            other => panic!("expected a static orb, got {other:?}"),
        }
    }

    #[test]
    fn shading_tracks_time_and_realism() {
        let mut scene = Scene::dark("#01000F");
        let day = Earth::new(EarthTime::Day, true).plot(&mut scene);
        let night = Earth::new(EarthTime::Night, true).plot(&mut scene);
        let flat = Earth::new(EarthTime::Night, false).plot(&mut scene);
        assert_ne!(scene.artist(day).style.color, scene.artist(night).style.color);
        assert_ne!(scene.artist(night).style.color, scene.artist(flat).style.color);
    }
}
