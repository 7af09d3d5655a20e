use std::io::{self, Write};

use crate::scene::{Frames, Scene, Shape};

/// Per-artist line of a scene summary.
fn shape_name(shape: &Shape) -> &'static str {
    match shape {
        Shape::Line(_) => "line",
        Shape::Segments(_) => "segments",
        Shape::Points(_) => "points",
        Shape::Orb { .. } => "orb",
    }
}

/// Write a machine-readable scene summary as JSON: view settings plus one
/// entry per artist (label, shape kind, frame count). Lets downstream
/// tooling sanity-check a scene without a rendering backend.
pub fn write_scene_summary<W: Write>(writer: &mut W, scene: &Scene) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"background\": \"{}\",", scene.background())?;
    writeln!(writer, "  \"axis_limit_km\": {:.2},", scene.axis_limit())?;
    match scene.animation() {
        Some(anim) => {
            writeln!(writer, "  \"animated_artists\": {},", anim.artists.len())?;
            writeln!(writer, "  \"interval_ms\": {},", anim.interval_ms)?;
        }
        None => {
            writeln!(writer, "  \"animated_artists\": 0,")?;
        }
    }
    writeln!(writer, "  \"artists\": [")?;

    let n = scene.artists().len();
    for (i, artist) in scene.artists().iter().enumerate() {
        let shape = match &artist.frames {
            Frames::Static(shape) => shape_name(shape),
            Frames::Animated(frames) => frames.first().map(shape_name).unwrap_or("empty"),
        };
        let frames = artist.frames.n_frames().unwrap_or(1);
        let comma = if i + 1 < n { "," } else { "" };
        writeln!(
            writer,
            "    {{ \"label\": \"{}\", \"shape\": \"{}\", \"frames\": {} }}{}",
            artist.label, shape, frames, comma
        )?;
    }

    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a scene summary to a file at the given path.
pub fn write_scene_summary_file(path: &str, scene: &Scene) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_scene_summary(&mut file, scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Artist, Style};
    use nalgebra::Vector3;

    #[test]
    fn summary_lists_every_artist() {
        let mut scene = Scene::dark("#01000F");
        scene.add(Artist {
            label: "orbit".into(),
            style: Style::default(),
            frames: Frames::Static(Shape::Line(vec![Vector3::zeros()])),
        });
        let id = scene.add(Artist {
            label: "fermi".into(),
            style: Style::default(),
            frames: Frames::Animated(vec![Shape::Points(vec![]), Shape::Points(vec![])]),
        });
        scene.set_animation(vec![id], 200);
        scene.set_axis_limit(15_000.0);

        let mut buf = Vec::new();
        write_scene_summary(&mut buf, &scene).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("\"axis_limit_km\": 15000.00"));
        assert!(out.contains("\"label\": \"orbit\", \"shape\": \"line\", \"frames\": 1"));
        assert!(out.contains("\"label\": \"fermi\", \"shape\": \"points\", \"frames\": 2"));
        assert!(out.contains("\"interval_ms\": 200"));
    }
}
