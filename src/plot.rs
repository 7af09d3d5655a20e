use nalgebra::Vector3;
use thiserror::Error;
use tracing::{debug, info};

use crate::bodies::{Earth, EarthTime, Moon, Sol, StarField};
use crate::geometry::{body_extent, linspace, DEFAULT_EXTENT_KM};
use crate::interp::PositionInterpolator;
use crate::scene::{Artist, ArtistId, Frames, Scene, Shape, Style};
use crate::skypoint::SkyPoint;
use crate::spacecraft::{Fermi, Gbm, DETECTORS};

// ---------------------------------------------------------------------------
// Detector colors (Paul Tol palette, one color per detector quadrant)
// ---------------------------------------------------------------------------

const DET_COLORS: [(&str, &str); 14] = [
    ("n0", "#CC3311"),
    ("n1", "#CC3311"),
    ("n2", "#CC3311"),
    ("n3", "#009988"),
    ("n4", "#009988"),
    ("n5", "#009988"),
    ("n6", "#EE7733"),
    ("n7", "#EE7733"),
    ("n8", "#EE7733"),
    ("n9", "#0077BB"),
    ("na", "#0077BB"),
    ("nb", "#0077BB"),
    ("b0", "#F2E300"),
    ("b1", "#F2E300"),
];

/// Ray color for a detector code. Every code the detector table produces
/// must resolve; a miss is the one internal failure of this module and
/// propagates to the caller.
pub fn det_color(id: &str) -> Result<&'static str, PlotError> {
    DET_COLORS
        .iter()
        .find(|(code, _)| *code == id)
        .map(|(_, color)| *color)
        .ok_or_else(|| PlotError::UnknownDetector { id: id.to_owned() })
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no color entry for detector {id:?}")]
    UnknownDetector { id: String },
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Feature toggles and styling for `animate_in_space`.
#[derive(Debug, Clone)]
pub struct AnimateOptions {
    pub n_step: usize,
    pub show_detector_pointing: bool,
    pub show_earth: bool,
    pub show_sun: bool,
    pub show_moon: bool,
    pub show_stars: bool,
    pub show_inactive: bool,
    pub background_color: String,
    pub detector_scaling_factor: f64,
    pub earth_time: EarthTime,
    pub realistic: bool,
    pub interval_ms: u64,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        AnimateOptions {
            n_step: 200,
            show_detector_pointing: false,
            show_earth: true,
            show_sun: false,
            show_moon: false,
            show_stars: false,
            show_inactive: false,
            background_color: "#01000F".into(),
            detector_scaling_factor: 20_000.0,
            earth_time: EarthTime::Night,
            realistic: true,
            interval_ms: 200,
        }
    }
}

/// Feature toggles and styling for `plot_in_space`.
#[derive(Clone)]
pub struct PlotOptions<'a> {
    pub show_detector_pointing: bool,
    pub show_earth: bool,
    pub show_sun: bool,
    pub show_moon: bool,
    pub show_stars: bool,
    pub show_orbit: bool,
    pub background_color: String,
    pub detector_scaling_factor: f64,
    pub earth_time: EarthTime,
    pub realistic: bool,
    /// Annotated sky directions drawn relative to the spacecraft when
    /// detector pointing is shown. Absent behaves exactly like empty.
    pub sky_points: Option<&'a [&'a dyn SkyPoint]>,
}

impl Default for PlotOptions<'_> {
    fn default() -> Self {
        PlotOptions {
            show_detector_pointing: false,
            show_earth: true,
            show_sun: false,
            show_moon: false,
            show_stars: false,
            show_orbit: true,
            background_color: "#01000F".into(),
            detector_scaling_factor: 20_000.0,
            earth_time: EarthTime::Night,
            realistic: true,
            sky_points: None,
        }
    }
}

fn max_extent(distances: &[f64]) -> f64 {
    distances.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

// ---------------------------------------------------------------------------
// Animated scene
// ---------------------------------------------------------------------------

/// Assemble a time-animated 3D scene of the spacecraft, its optional
/// companions, and optional detector boresight rays over the full time
/// range of `interp`.
///
/// The returned scene carries every artist plus the animation registration
/// (animated artists and frame interval); a backend plays it back, and
/// tests can inspect it headless.
pub fn animate_in_space(
    interp: &impl PositionInterpolator,
    opts: &AnimateOptions,
) -> Result<Scene, PlotError> {
    let mut scene = Scene::dark(&opts.background_color);

    let (tmin, tmax) = interp.minmax_time();
    let times = linspace(tmin, tmax, opts.n_step);
    debug!(n_step = opts.n_step, tmin, tmax, "animate: sampling");

    let mut animated: Vec<ArtistId> = Vec::new();
    let mut distances = vec![DEFAULT_EXTENT_KM];

    if opts.show_earth {
        Earth::new(opts.earth_time, opts.realistic).plot(&mut scene);
    }

    if opts.show_sun {
        let track: Vec<_> = times.iter().map(|&t| interp.sun_position(t)).collect();
        let sol = Sol::new(track);
        distances.push(farthest(sol.positions(), sol.radius()));
        animated.push(sol.plot(&mut scene));
    }

    if opts.show_moon {
        let track: Vec<_> = times.iter().map(|&t| interp.moon_position(t)).collect();
        let moon = Moon::new(track);
        distances.push(farthest(moon.positions(), moon.radius()));
        animated.push(moon.plot(&mut scene));
    }

    // Spacecraft track, and the subset of samples where it was not taking data
    let sc_track: Vec<_> = times.iter().map(|&t| interp.sc_pos(t)).collect();
    let quats: Vec<_> = times.iter().map(|&t| interp.quaternion(t)).collect();
    let inactive: Vec<_> = times
        .iter()
        .zip(&sc_track)
        .filter(|(&t, _)| !interp.is_active(t))
        .map(|(_, pos)| *pos)
        .collect();

    if opts.show_detector_pointing {
        distances.push(opts.detector_scaling_factor);
        // Rays are scaled by the extent as accumulated up to this point;
        // bodies added later do not re-scale them.
        let reach = max_extent(&distances);

        let mut gbm = Gbm::new(interp.quaternion(tmin), interp.sc_pos(tmin));
        let mut rays: Vec<(&'static str, Vec<Shape>)> = DETECTORS
            .iter()
            .map(|det| (det.id, Vec::with_capacity(times.len())))
            .collect();

        for (&t, sc) in times.iter().zip(&sc_track) {
            gbm.set_quaternion(interp.quaternion(t));
            for ((_, frames), (_, dir)) in rays.iter_mut().zip(gbm.pointings()) {
                frames.push(Shape::Segments(vec![[*sc, sc + dir * reach]]));
            }
        }

        for (id, frames) in rays {
            let color = det_color(id)?;
            animated.push(scene.add(Artist {
                label: format!("detector:{id}"),
                style: Style::colored(color),
                frames: Frames::Animated(frames),
            }));
        }
    }

    if opts.show_inactive {
        let mut style = Style::colored("#DC1212");
        style.alpha = 0.5;
        style.size = 1.0;
        scene.add(Artist {
            label: "inactive".into(),
            style,
            frames: Frames::Static(Shape::Points(inactive)),
        });
    }

    let fermi = Fermi::new(quats, sc_track);
    animated.extend(fermi.plot(&mut scene));

    if opts.show_stars {
        StarField::new(200, max_extent(&distances) - 2.0).plot(&mut scene);
    }

    let limit = max_extent(&distances);
    scene.set_axis_limit(limit);
    scene.set_animation(animated, opts.interval_ms);
    info!(
        artists = scene.artists().len(),
        limit, "animate: scene assembled"
    );
    Ok(scene)
}

/// Largest `compute_distance` over a body track. The animated extent uses
/// the whole track, not just the final sample.
fn farthest(track: &[Vector3<f64>], radius: f64) -> f64 {
    track
        .iter()
        .map(|pos| body_extent(pos, radius))
        .fold(f64::NEG_INFINITY, f64::max)
}

// ---------------------------------------------------------------------------
// Static scene
// ---------------------------------------------------------------------------

/// Assemble a static 3D scene at the single instant `time`, with an
/// optional orbit trace over the full time range.
///
/// Returns the scene together with the spacecraft renderer so the caller
/// can keep annotating it.
pub fn plot_in_space(
    interp: &impl PositionInterpolator,
    time: f64,
    opts: &PlotOptions<'_>,
) -> Result<(Scene, Fermi), PlotError> {
    let mut scene = Scene::dark(&opts.background_color);
    let mut distances = vec![DEFAULT_EXTENT_KM];

    if opts.show_orbit {
        let (tmin, tmax) = interp.minmax_time();
        let track: Vec<_> = linspace(tmin, tmax, 500)
            .into_iter()
            .map(|t| interp.sc_pos(t))
            .collect();
        let mut style = Style::default();
        style.width = 0.5;
        scene.add(Artist {
            label: "orbit".into(),
            style,
            frames: Frames::Static(Shape::Line(track)),
        });
    }

    if opts.show_earth {
        Earth::new(opts.earth_time, opts.realistic).plot(&mut scene);
    }

    if opts.show_sun {
        let sol = Sol::new(vec![interp.sun_position(time)]);
        distances.push(farthest(sol.positions(), sol.radius()));
        sol.plot(&mut scene);
    }

    if opts.show_moon {
        let moon = Moon::new(vec![interp.moon_position(time)]);
        distances.push(farthest(moon.positions(), moon.radius()));
        moon.plot(&mut scene);
    }

    let sc = interp.sc_pos(time);
    let fermi = Fermi::new(vec![interp.quaternion(time)], vec![sc]);
    fermi.plot(&mut scene);

    if opts.show_detector_pointing {
        distances.push(opts.detector_scaling_factor);
        let reach = max_extent(&distances);

        let gbm = Gbm::new(interp.quaternion(time), sc);
        for (id, dir) in gbm.pointings() {
            let color = det_color(id)?;
            scene.add(Artist {
                label: format!("detector:{id}"),
                style: Style::colored(color),
                frames: Frames::Static(Shape::Segments(vec![[sc, sc + dir * reach]])),
            });
        }

        for sky_point in opts.sky_points.unwrap_or(&[]) {
            sky_point.plot(&mut scene, &sc);
        }
    }

    if opts.show_stars {
        StarField::new(100, max_extent(&distances) - 2.0).plot(&mut scene);
    }

    let limit = max_extent(&distances);
    scene.set_axis_limit(limit);
    info!(
        artists = scene.artists().len(),
        limit, time, "plot: scene assembled"
    );
    Ok((scene, fermi))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
