pub mod bodies;
pub mod geometry;
pub mod interp;
pub mod io;
pub mod orbit;
pub mod plot;
pub mod scene;
pub mod skypoint;
pub mod spacecraft;

// Convenience re-exports for the common entry points
pub mod prelude {
    pub use crate::bodies::{Earth, EarthTime, Moon, Sol, StarField};
    pub use crate::geometry::{compute_distance, DEFAULT_EXTENT_KM};
    pub use crate::interp::{OrbitSample, PositionHistory, PositionInterpolator};
    pub use crate::plot::{animate_in_space, plot_in_space, AnimateOptions, PlotOptions};
    pub use crate::scene::{Artist, Frames, Scene, Shape, Style};
    pub use crate::skypoint::{SkyPoint, SourceMarker};
    pub use crate::spacecraft::{Fermi, Gbm, DETECTORS};
}
