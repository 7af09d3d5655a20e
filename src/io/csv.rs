use std::io::{self, BufRead, Write};

use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use thiserror::Error;

use crate::interp::{InterpError, OrbitSample, PositionHistory};

/// Failures while reading a history back in.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line}: expected 15 comma-separated fields")]
    BadFieldCount { line: usize },
    #[error("line {line}: {source}")]
    BadNumber {
        line: usize,
        source: std::num::ParseFloatError,
    },
    #[error(transparent)]
    Interp(#[from] InterpError),
}

/// Write a position history to CSV.
///
/// Columns: time, sc_x, sc_y, sc_z, quat_w, quat_x, quat_y, quat_z,
///          sun_x, sun_y, sun_z, moon_x, moon_y, moon_z, active
pub fn write_history<W: Write>(writer: &mut W, samples: &[OrbitSample]) -> io::Result<()> {
    writeln!(
        writer,
        "time,sc_x,sc_y,sc_z,quat_w,quat_x,quat_y,quat_z,\
         sun_x,sun_y,sun_z,moon_x,moon_y,moon_z,active"
    )?;

    for s in samples {
        let q = s.quat.quaternion();
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},\
             {:.9},{:.9},{:.9},{:.9},\
             {:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{}",
            s.time,
            s.sc_pos.x, s.sc_pos.y, s.sc_pos.z,
            q.w, q.i, q.j, q.k,
            s.sun.x, s.sun.y, s.sun.z,
            s.moon.x, s.moon.y, s.moon.z,
            s.active as u8,
        )?;
    }

    Ok(())
}

/// Write a position history to a CSV file at the given path.
pub fn write_history_file(path: &str, samples: &[OrbitSample]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_history(&mut file, samples)
}

/// Read a position history written by `write_history`.
pub fn read_history<R: BufRead>(reader: R) -> Result<PositionHistory, HistoryError> {
    let mut samples = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i == 0 || line.trim().is_empty() {
            continue; // header
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 15 {
            return Err(HistoryError::BadFieldCount { line: i + 1 });
        }
        let num = |s: &str| -> Result<f64, HistoryError> {
            s.trim().parse().map_err(|source| HistoryError::BadNumber {
                line: i + 1,
                source,
            })
        };

        let quat = UnitQuaternion::from_quaternion(Quaternion::new(
            num(fields[4])?,
            num(fields[5])?,
            num(fields[6])?,
            num(fields[7])?,
        ));
        samples.push(OrbitSample {
            time: num(fields[0])?,
            sc_pos: Vector3::new(num(fields[1])?, num(fields[2])?, num(fields[3])?),
            quat,
            sun: Vector3::new(num(fields[8])?, num(fields[9])?, num(fields[10])?),
            moon: Vector3::new(num(fields[11])?, num(fields[12])?, num(fields[13])?),
            active: num(fields[14])? != 0.0,
        });
    }

    Ok(PositionHistory::new(samples)?)
}

/// Read a position history from a CSV file at the given path.
pub fn read_history_file(path: &str) -> Result<PositionHistory, HistoryError> {
    let file = std::fs::File::open(path)?;
    read_history(io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::PositionInterpolator;
    use crate::orbit::circular_orbit_history;
    use approx::assert_relative_eq;

    #[test]
    fn csv_output_has_header_and_rows() {
        let hist = circular_orbit_history(550.0, 25.6, 60.0, 30.0, &[]).unwrap();
        let mut buf = Vec::new();
        write_history(&mut buf, hist.samples()).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 1 + hist.samples().len());
    }

    #[test]
    fn history_round_trips() {
        let hist = circular_orbit_history(550.0, 25.6, 300.0, 10.0, &[(100.0, 200.0)]).unwrap();
        let mut buf = Vec::new();
        write_history(&mut buf, hist.samples()).unwrap();

        let restored = read_history(&buf[..]).unwrap();
        assert_eq!(restored.samples().len(), hist.samples().len());
        assert_eq!(restored.minmax_time(), hist.minmax_time());
        let t = 42.0;
        assert_relative_eq!(
            (restored.sc_pos(t) - hist.sc_pos(t)).norm(),
            0.0,
            epsilon = 1e-3 // positions serialized at 0.1 m precision
        );
        assert!(!restored.is_active(150.0));
        assert!(restored.is_active(250.0));
    }

    #[test]
    fn truncated_row_is_rejected() {
        let data = "time,sc_x\n1.0,2.0\n";
        let err = read_history(data.as_bytes()).unwrap_err();
        assert!(matches!(err, HistoryError::BadFieldCount { line: 2 }));
    }
}
