use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use gbm_viz::orbit;
use gbm_viz::plot::{animate_in_space, AnimateOptions};
use gbm_viz::scene::{Scene, Shape};

fn main() -> eframe::Result {
    let interp = orbit::circular_orbit_history(535.0, 25.6, 5_760.0, 10.0, &[(1_800.0, 2_400.0)])
        .expect("orbit synthesis failed");
    let opts = AnimateOptions {
        n_step: 120,
        show_detector_pointing: true,
        show_inactive: true,
        show_stars: true,
        ..Default::default()
    };
    let scene = animate_in_space(&interp, &opts).expect("scene assembly failed");

    let n_frames = scene
        .artists()
        .iter()
        .filter_map(|a| a.frames.n_frames())
        .max()
        .unwrap_or(1);

    let app = SceneViz {
        scene,
        n_frames,
        frame: 0,
        playing: true,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("GBM Space View", options, Box::new(|_| Ok(Box::new(app))))
}

struct SceneViz {
    scene: Scene,
    n_frames: usize,
    frame: usize,
    playing: bool,
}

/// Projection plane for one panel.
#[derive(Clone, Copy)]
enum Plane {
    Xy,
    Xz,
}

impl Plane {
    fn project(self, p: &nalgebra::Vector3<f64>) -> [f64; 2] {
        match self {
            Plane::Xy => [p.x, p.y],
            Plane::Xz => [p.x, p.z],
        }
    }

    fn label(self) -> &'static str {
        match self {
            Plane::Xy => "X-Y (km)",
            Plane::Xz => "X-Z (km)",
        }
    }
}

fn hex_color(hex: &str) -> egui::Color32 {
    let parse = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0xFF);
    if let Some(rgb) = hex.strip_prefix('#') {
        if rgb.len() == 6 {
            return egui::Color32::from_rgb(
                parse(&rgb[0..2]),
                parse(&rgb[2..4]),
                parse(&rgb[4..6]),
            );
        }
    }
    egui::Color32::WHITE
}

/// Circle outline approximating an orb silhouette in the projection plane.
fn orb_outline(center: [f64; 2], radius: f64) -> Vec<[f64; 2]> {
    (0..=64)
        .map(|i| {
            let a = i as f64 / 64.0 * std::f64::consts::TAU;
            [center[0] + radius * a.cos(), center[1] + radius * a.sin()]
        })
        .collect()
}

impl SceneViz {
    fn draw_plane(&self, plot_ui: &mut egui_plot::PlotUi, plane: Plane) {
        for artist in self.scene.artists() {
            let Some(shape) = artist.frames.at(self.frame) else {
                continue;
            };
            let color = hex_color(&artist.style.color);
            match shape {
                Shape::Line(points) => {
                    let pts: PlotPoints = points.iter().map(|p| plane.project(p)).collect();
                    plot_ui.line(Line::new(artist.label.clone(), pts).color(color));
                }
                Shape::Segments(segments) => {
                    for seg in segments {
                        let pts: PlotPoints = seg.iter().map(|p| plane.project(p)).collect();
                        plot_ui.line(Line::new(artist.label.clone(), pts).color(color));
                    }
                }
                Shape::Points(points) => {
                    let pts: PlotPoints = points.iter().map(|p| plane.project(p)).collect();
                    plot_ui.points(
                        Points::new(artist.label.clone(), pts)
                            .color(color)
                            .radius(artist.style.size as f32),
                    );
                }
                Shape::Orb { center, radius } => {
                    let outline = orb_outline(plane.project(center), *radius);
                    plot_ui.line(Line::new(artist.label.clone(), outline).color(color));
                }
            }
        }
    }
}

impl eframe::App for SceneViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.playing && self.n_frames > 1 {
            let interval = self
                .scene
                .animation()
                .map(|a| a.interval_ms)
                .unwrap_or(200);
            self.frame = (self.frame + 1) % self.n_frames;
            ctx.request_repaint_after(std::time::Duration::from_millis(interval));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("GBM Space View");
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.playing, "play");
                ui.add(
                    egui::Slider::new(&mut self.frame, 0..=self.n_frames.saturating_sub(1))
                        .text("frame"),
                );
                ui.label(format!(
                    "artists: {}  |  view ±{:.0} km",
                    self.scene.artists().len(),
                    self.scene.axis_limit()
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let limit = self.scene.axis_limit();

            ui.horizontal(|ui| {
                for plane in [Plane::Xy, Plane::Xz] {
                    ui.vertical(|ui| {
                        ui.label(plane.label());
                        Plot::new(plane.label())
                            .width(half_w)
                            .height(available.y - 24.0)
                            .data_aspect(1.0)
                            .include_x(-limit)
                            .include_x(limit)
                            .include_y(-limit)
                            .include_y(limit)
                            .show(ui, |plot_ui| self.draw_plane(plot_ui, plane));
                    });
                }
            });
        });
    }
}
