use gbm_viz::orbit;
use gbm_viz::plot::{plot_in_space, PlotOptions};
use gbm_viz::scene::{Frames, Shape};
use gbm_viz::skypoint::{SkyPoint, SourceMarker};
use nalgebra::Vector3;

fn main() {
    println!("=== Static scene: detector pointing toward a burst ===\n");

    let interp = orbit::circular_orbit_history(535.0, 25.6, 5_760.0, 10.0, &[])
        .expect("orbit synthesis failed");

    // GRB-like sky position plus a couple of reference sources
    let burst = SourceMarker::new("grb250101a", 145.2, -38.7);
    let crab = SourceMarker::new("crab", 83.63, 22.01);
    let sky_points: Vec<&dyn SkyPoint> = vec![&burst, &crab];

    let opts = PlotOptions {
        show_detector_pointing: true,
        show_moon: true,
        sky_points: Some(&sky_points),
        ..Default::default()
    };
    let (mut scene, fermi) = plot_in_space(&interp, 2_880.0, &opts).expect("scene assembly failed");

    println!("Spacecraft at ({:.0}, {:.0}, {:.0}) km", fermi.positions()[0].x, fermi.positions()[0].y, fermi.positions()[0].z);
    println!("Axis limit: {:.0} km\n", scene.axis_limit());

    // Which detector ray ends closest to the burst direction?
    let burst_dir = burst.direction();
    let mut best: Option<(String, f64)> = None;
    for artist in scene.labeled("detector:") {
        if let Frames::Static(Shape::Segments(segs)) = &artist.frames {
            let ray = (segs[0][1] - segs[0][0]).normalize();
            let sep = ray.dot(&burst_dir).clamp(-1.0, 1.0).acos().to_degrees();
            println!("  {:<14} separation: {:>6.1} deg", artist.label, sep);
            if best.as_ref().map_or(true, |(_, s)| sep < *s) {
                best = Some((artist.label.clone(), sep));
            }
        }
    }
    if let Some((label, sep)) = best {
        println!("\nBest-placed detector: {label} ({sep:.1} deg from burst)");
    }

    // Callers can keep annotating through the returned renderer
    fermi.annotate(&mut scene, "trigger", Vector3::new(0.0, 0.0, 800.0));
    println!("Total artists after annotation: {}", scene.artists().len());
}
