use nalgebra::Vector3;
use tracing::debug;

// ---------------------------------------------------------------------------
// Plotting primitives
//
// The scene is a capturing context: bodies and plot routines append artists,
// a backend (or a test) reads them back. Nothing here talks to a renderer,
// so scenes can be assembled and inspected headless.
// ---------------------------------------------------------------------------

/// Geometry payload of one artist.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Connected polyline through the given points.
    Line(Vec<Vector3<f64>>),
    /// Disjoint segments (e.g. one detector ray per time sample).
    Segments(Vec<[Vector3<f64>; 2]>),
    /// Unconnected point markers.
    Points(Vec<Vector3<f64>>),
    /// Sphere silhouette.
    Orb { center: Vector3<f64>, radius: f64 },
}

/// Static geometry, or one `Shape` per animation frame.
#[derive(Debug, Clone)]
pub enum Frames {
    Static(Shape),
    Animated(Vec<Shape>),
}

impl Frames {
    /// Frame count for animated artists, `None` for static ones.
    pub fn n_frames(&self) -> Option<usize> {
        match self {
            Frames::Static(_) => None,
            Frames::Animated(frames) => Some(frames.len()),
        }
    }

    /// Shape for frame `i` (static artists show the same shape every frame).
    pub fn at(&self, i: usize) -> Option<&Shape> {
        match self {
            Frames::Static(shape) => Some(shape),
            Frames::Animated(frames) => frames.get(i),
        }
    }
}

/// Rendering hints carried alongside the geometry.
#[derive(Debug, Clone)]
pub struct Style {
    pub color: String,
    pub alpha: f64,
    pub width: f64,
    pub size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            color: "#FFFFFF".into(),
            alpha: 1.0,
            width: 1.0,
            size: 2.0,
        }
    }
}

impl Style {
    pub fn colored(color: &str) -> Self {
        Style {
            color: color.into(),
            ..Default::default()
        }
    }
}

/// One renderable element of a scene.
#[derive(Debug, Clone)]
pub struct Artist {
    pub label: String,
    pub style: Style,
    pub frames: Frames,
}

/// Handle to an artist inside its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtistId(usize);

/// Animation registration: which artists play, and how fast.
#[derive(Debug, Clone)]
pub struct Animation {
    pub artists: Vec<ArtistId>,
    pub interval_ms: u64,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// A 3D scene under assembly. Owns every artist plus view and animation
/// settings. Each plotting entry point builds a fresh scene, so multiple
/// scenes can coexist; a scene is not meant to be mutated from two places
/// at once.
#[derive(Debug)]
pub struct Scene {
    background: String,
    artists: Vec<Artist>,
    axis_limit: f64,
    animation: Option<Animation>,
}

impl Scene {
    /// Fresh dark-styled scene (no frame box, no axes) over the given
    /// background color.
    pub fn dark(background: &str) -> Self {
        Scene {
            background: background.into(),
            artists: Vec::new(),
            axis_limit: crate::geometry::DEFAULT_EXTENT_KM,
            animation: None,
        }
    }

    pub fn add(&mut self, artist: Artist) -> ArtistId {
        debug!(label = %artist.label, "scene: add artist");
        self.artists.push(artist);
        ArtistId(self.artists.len() - 1)
    }

    pub fn artist(&self, id: ArtistId) -> &Artist {
        &self.artists[id.0]
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Artists whose label starts with `prefix` (e.g. `"detector:"`).
    pub fn labeled<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Artist> {
        self.artists.iter().filter(move |a| a.label.starts_with(prefix))
    }

    /// Set the cubic view half-width (all three axes get ±limit).
    pub fn set_axis_limit(&mut self, limit: f64) {
        self.axis_limit = limit;
    }

    pub fn axis_limit(&self) -> f64 {
        self.axis_limit
    }

    /// Register the animated artists with the playback control.
    pub fn set_animation(&mut self, artists: Vec<ArtistId>, interval_ms: u64) {
        debug!(n = artists.len(), interval_ms, "scene: animation control");
        self.animation = Some(Animation {
            artists,
            interval_ms,
        });
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn background(&self) -> &str {
        &self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_lookup_artists() {
        let mut scene = Scene::dark("#01000F");
        let id = scene.add(Artist {
            label: "orbit".into(),
            style: Style::default(),
            frames: Frames::Static(Shape::Line(vec![Vector3::zeros()])),
        });
        assert_eq!(scene.artists().len(), 1);
        assert_eq!(scene.artist(id).label, "orbit");
        assert_eq!(scene.background(), "#01000F");
    }

    #[test]
    fn labeled_filters_by_prefix() {
        let mut scene = Scene::dark("#000000");
        for label in ["detector:n0", "detector:b1", "fermi"] {
            scene.add(Artist {
                label: label.into(),
                style: Style::default(),
                frames: Frames::Static(Shape::Points(vec![])),
            });
        }
        assert_eq!(scene.labeled("detector:").count(), 2);
        assert_eq!(scene.labeled("fermi").count(), 1);
        assert_eq!(scene.labeled("moon").count(), 0);
    }

    #[test]
    fn animated_frames_index() {
        let frames = Frames::Animated(vec![
            Shape::Points(vec![Vector3::x()]),
            Shape::Points(vec![Vector3::y()]),
        ]);
        assert_eq!(frames.n_frames(), Some(2));
        assert!(frames.at(1).is_some());
        assert!(frames.at(2).is_none());

        let fixed = Frames::Static(Shape::Points(vec![]));
        assert_eq!(fixed.n_frames(), None);
        assert!(fixed.at(17).is_some());
    }

    #[test]
    fn default_axis_limit_is_seed_extent() {
        let scene = Scene::dark("#01000F");
        assert_eq!(scene.axis_limit(), crate::geometry::DEFAULT_EXTENT_KM);
    }
}
