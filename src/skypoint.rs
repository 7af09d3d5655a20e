use nalgebra::Vector3;

use crate::scene::{Artist, Frames, Scene, Shape, Style};

/// An externally defined annotated sky direction, rendered relative to the
/// current spacecraft position. Implementations draw whatever they like;
/// the plotting entry points never do extent bookkeeping for them.
pub trait SkyPoint {
    fn plot(&self, scene: &mut Scene, sc_pos: &Vector3<f64>);
}

/// A named point source at fixed equatorial coordinates, drawn as a ray
/// from the spacecraft toward the source plus an endpoint marker.
#[derive(Debug, Clone)]
pub struct SourceMarker {
    pub name: String,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub color: String,
    /// Rendered ray length, km.
    pub reach: f64,
}

impl SourceMarker {
    pub fn new(name: &str, ra_deg: f64, dec_deg: f64) -> Self {
        SourceMarker {
            name: name.into(),
            ra_deg,
            dec_deg,
            color: "#E066FF".into(),
            reach: 10_000.0,
        }
    }

    /// Unit direction toward the source in the inertial frame.
    pub fn direction(&self) -> Vector3<f64> {
        let ra = self.ra_deg.to_radians();
        let dec = self.dec_deg.to_radians();
        Vector3::new(dec.cos() * ra.cos(), dec.cos() * ra.sin(), dec.sin())
    }
}

impl SkyPoint for SourceMarker {
    fn plot(&self, scene: &mut Scene, sc_pos: &Vector3<f64>) {
        let tip = sc_pos + self.direction() * self.reach;
        scene.add(Artist {
            label: format!("sky:{}", self.name),
            style: Style::colored(&self.color),
            frames: Frames::Static(Shape::Segments(vec![[*sc_pos, tip]])),
        });
        let mut marker_style = Style::colored(&self.color);
        marker_style.size = 3.0;
        scene.add(Artist {
            label: format!("sky:{}:marker", self.name),
            style: marker_style,
            frames: Frames::Static(Shape::Points(vec![tip])),
        });
    }
}
