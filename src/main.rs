use gbm_viz::interp::PositionInterpolator;
use gbm_viz::io::json;
use gbm_viz::orbit;
use gbm_viz::plot::{animate_in_space, plot_in_space, AnimateOptions, PlotOptions};
use gbm_viz::scene::Scene;
use gbm_viz::skypoint::{SkyPoint, SourceMarker};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // -----------------------------------------------------------------------
    // Orbit: Fermi-like LEO, one full revolution, with one inactive passage
    // -----------------------------------------------------------------------
    let altitude = 535.0; // km
    let inclination = 25.6; // deg
    let duration = 5_760.0; // s, ~one orbital period
    let interp = orbit::circular_orbit_history(
        altitude,
        inclination,
        duration,
        10.0,
        &[(1_800.0, 2_400.0)],
    )
    .expect("orbit synthesis produced an invalid history");

    let (tmin, tmax) = interp.minmax_time();

    // -----------------------------------------------------------------------
    // Static scene at mid-orbit, with detector rays and a sky point
    // -----------------------------------------------------------------------
    let crab = SourceMarker::new("crab", 83.63, 22.01);
    let sky_points: Vec<&dyn SkyPoint> = vec![&crab];
    let static_opts = PlotOptions {
        show_detector_pointing: true,
        show_moon: true,
        show_stars: true,
        sky_points: Some(&sky_points),
        ..Default::default()
    };
    let (static_scene, fermi) = plot_in_space(&interp, (tmin + tmax) / 2.0, &static_opts)
        .expect("static scene assembly failed");

    // -----------------------------------------------------------------------
    // Animated scene over the full orbit
    // -----------------------------------------------------------------------
    let animate_opts = AnimateOptions {
        n_step: 120,
        show_detector_pointing: true,
        show_inactive: true,
        show_stars: true,
        ..Default::default()
    };
    let animated_scene =
        animate_in_space(&interp, &animate_opts).expect("animated scene assembly failed");

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  GBM SPACE VIEW — scene assembly report");
    println!("====================================================================");
    println!();
    println!("  Orbit");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Altitude:     {:>8.1} km    Inclination:  {:>8.1} deg",
        altitude, inclination
    );
    println!(
        "  Time range:   {:>8.1} s … {:.1} s    Samples: {}",
        tmin,
        tmax,
        interp.samples().len()
    );
    println!(
        "  Spacecraft @ mid-orbit: ({:.1}, {:.1}, {:.1}) km",
        fermi.positions()[0].x,
        fermi.positions()[0].y,
        fermi.positions()[0].z
    );
    println!();

    print_scene("Static scene (mid-orbit)", &static_scene);
    print_scene("Animated scene (full orbit)", &animated_scene);

    let summary_path = "scene_summary.json";
    if let Err(e) = json::write_scene_summary_file(summary_path, &animated_scene) {
        eprintln!("  (could not write {summary_path}: {e})");
    } else {
        println!("  Summary written to {summary_path}");
    }
    println!("====================================================================");
    println!();
}

fn print_scene(title: &str, scene: &Scene) {
    println!("  {title}");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Artists:      {:>8}      Axis limit:   {:>12.1} km",
        scene.artists().len(),
        scene.axis_limit()
    );
    if let Some(anim) = scene.animation() {
        println!(
            "  Animated:     {:>8}      Interval:     {:>12} ms",
            anim.artists.len(),
            anim.interval_ms
        );
    }
    let detectors = scene.labeled("detector:").count();
    if detectors > 0 {
        println!("  Detector rays:{detectors:>8}");
    }
    println!();
}
