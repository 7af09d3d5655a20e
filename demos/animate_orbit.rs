use gbm_viz::interp::PositionInterpolator;
use gbm_viz::io::csv;
use gbm_viz::orbit;
use gbm_viz::plot::{animate_in_space, AnimateOptions};

fn main() {
    println!("=== Animated orbit: one Fermi revolution ===\n");

    // ~96 minute LEO with a 10-minute inactive passage mid-orbit
    let interp = orbit::circular_orbit_history(535.0, 25.6, 5_760.0, 10.0, &[(1_800.0, 2_400.0)])
        .expect("orbit synthesis failed");
    let (tmin, tmax) = interp.minmax_time();
    println!("Time range: {tmin:.0} .. {tmax:.0} s ({} samples)", interp.samples().len());

    let opts = AnimateOptions {
        n_step: 120,
        show_detector_pointing: true,
        show_moon: true,
        show_inactive: true,
        show_stars: true,
        ..Default::default()
    };
    let scene = animate_in_space(&interp, &opts).expect("scene assembly failed");

    println!("Artists:    {}", scene.artists().len());
    println!("Animated:   {}", scene.animation().map_or(0, |a| a.artists.len()));
    println!("Axis limit: {:.0} km", scene.axis_limit());
    println!();

    for artist in scene.artists() {
        println!(
            "  {:<16} frames: {}",
            artist.label,
            artist.frames.n_frames().map_or("static".into(), |n| n.to_string()),
        );
    }

    // Keep the history around for replays
    let path = "orbit_history.csv";
    csv::write_history_file(path, interp.samples()).expect("could not write history");
    println!("\nHistory written to {path}");
}
