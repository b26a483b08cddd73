//! Adobe/Resolve `.cube` LUT format support.
//!
//! `.cube` is the plain-text interchange format this tool reads and writes.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! Data lines run red-fastest (red inner, green middle, blue outer), the
//! same order [`Lut3D`] stores its table in, so reading and writing move the
//! table verbatim and a read/write cycle round-trips the file's values.

use crate::{Lut1D, Lut3D, LutError, LutResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads a 1D LUT from a `.cube` file.
pub fn read_1d<P: AsRef<Path>>(path: P) -> LutResult<Lut1D> {
    let file = File::open(path.as_ref())?;
    parse_1d(BufReader::new(file))
}

/// Reads a 3D LUT from a `.cube` file.
///
/// # Example
///
/// ```rust,ignore
/// let lut = cube::read_3d("grade.cube")?;
/// let rgb = lut.apply([0.5, 0.3, 0.2]);
/// ```
pub fn read_3d<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let file = File::open(path.as_ref())?;
    parse_3d(BufReader::new(file))
}

/// Collected header/data state shared by the 1D and 3D parsers.
struct RawCube {
    title: Option<String>,
    size_1d: Option<usize>,
    size_3d: Option<usize>,
    domain_min: [f32; 3],
    domain_max: [f32; 3],
    data: Vec<[f32; 3]>,
}

fn parse_lines<R: BufRead>(reader: R) -> LutResult<RawCube> {
    let mut raw = RawCube {
        title: None,
        size_1d: None,
        size_3d: None,
        domain_min: [0.0; 3],
        domain_max: [1.0; 3],
        data: Vec::new(),
    };

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("TITLE") {
            raw.title = Some(rest.trim().trim_matches('"').to_string());
        } else if line.starts_with("LUT_1D_SIZE") {
            raw.size_1d = Some(parse_size(line)?);
        } else if line.starts_with("LUT_3D_SIZE") {
            raw.size_3d = Some(parse_size(line)?);
        } else if line.starts_with("DOMAIN_MIN") {
            raw.domain_min = parse_triple(line, 1)?;
        } else if line.starts_with("DOMAIN_MAX") {
            raw.domain_max = parse_triple(line, 1)?;
        } else {
            raw.data.push(parse_triple(line, 0)?);
        }
    }

    Ok(raw)
}

/// Parses a 1D LUT from a reader.
pub fn parse_1d<R: BufRead>(reader: R) -> LutResult<Lut1D> {
    let raw = parse_lines(reader)?;

    if raw.size_3d.is_some() {
        return Err(LutError::ParseError("expected 1D LUT, found 3D".into()));
    }
    let size = raw
        .size_1d
        .ok_or_else(|| LutError::ParseError("missing LUT_1D_SIZE".into()))?;

    if raw.data.len() != size {
        return Err(LutError::ParseError(format!(
            "expected {} entries, found {}",
            size,
            raw.data.len()
        )));
    }

    let r: Vec<f32> = raw.data.iter().map(|rgb| rgb[0]).collect();
    let g: Vec<f32> = raw.data.iter().map(|rgb| rgb[1]).collect();
    let b: Vec<f32> = raw.data.iter().map(|rgb| rgb[2]).collect();

    Ok(
        Lut1D::from_rgb(r, g, b, raw.domain_min[0], raw.domain_max[0])?
            .with_name(raw.title.unwrap_or_default()),
    )
}

/// Parses a 3D LUT from a reader.
pub fn parse_3d<R: BufRead>(reader: R) -> LutResult<Lut3D> {
    let raw = parse_lines(reader)?;

    if raw.size_1d.is_some() {
        return Err(LutError::ParseError("expected 3D LUT, found 1D".into()));
    }
    let size = raw
        .size_3d
        .ok_or_else(|| LutError::ParseError("missing LUT_3D_SIZE".into()))?;

    let expected = size.checked_mul(size).and_then(|s| s.checked_mul(size));
    match expected {
        Some(expected) if raw.data.len() == expected => {}
        _ => {
            return Err(LutError::ParseError(format!(
                "expected {}^3 values, found {}",
                size,
                raw.data.len()
            )));
        }
    }

    // File order is red-fastest, identical to the in-memory layout.
    Ok(Lut3D::from_data(raw.data, size)?
        .with_domain(raw.domain_min, raw.domain_max)
        .with_name(raw.title.unwrap_or_default()))
}

/// Writes a 3D LUT to a `.cube` file.
///
/// # Example
///
/// ```rust,ignore
/// let lut = Lut3D::identity(33).with_name("identity");
/// cube::write_3d("identity.cube", &lut)?;
/// ```
pub fn write_3d<P: AsRef<Path>>(path: P, lut: &Lut3D) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Generated by lutforge")?;
    if !lut.name.is_empty() {
        writeln!(writer, "TITLE \"{}\"", lut.name)?;
    }
    writeln!(writer, "LUT_3D_SIZE {}", lut.size)?;

    let min = lut.domain_min;
    let max = lut.domain_max;
    if min != [0.0, 0.0, 0.0] || max != [1.0, 1.0, 1.0] {
        writeln!(writer, "DOMAIN_MIN {} {} {}", min[0], min[1], min[2])?;
        writeln!(writer, "DOMAIN_MAX {} {} {}", max[0], max[1], max[2])?;
    }
    writeln!(writer)?;

    // Storage order is already the file's red-fastest order.
    for rgb in &lut.data {
        writeln!(writer, "{:.6} {:.6} {:.6}", rgb[0], rgb[1], rgb[2])?;
    }

    writer.flush()?;
    Ok(())
}

// Helper functions

fn parse_size(line: &str) -> LutResult<usize> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(LutError::ParseError(format!("invalid size line: {}", line)));
    }
    parts[1]
        .parse()
        .map_err(|_| LutError::ParseError(format!("invalid size value: {}", parts[1])))
}

fn parse_triple(line: &str, skip: usize) -> LutResult<[f32; 3]> {
    let mut parts = line.split_whitespace().skip(skip);
    let mut out = [0.0f32; 3];
    for v in out.iter_mut() {
        let field = parts
            .next()
            .ok_or_else(|| LutError::ParseError(format!("invalid data line: {}", line)))?;
        *v = field
            .parse()
            .map_err(|_| LutError::ParseError(format!("invalid float '{}' in: {}", field, line)))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_3d_cube() {
        let cube = r#"
# Test LUT
TITLE "Test Grade"
LUT_3D_SIZE 2
DOMAIN_MIN 0.0 0.0 0.0
DOMAIN_MAX 1.0 1.0 1.0

0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
1.0 1.0 0.0
0.0 0.0 1.0
1.0 0.0 1.0
0.0 1.0 1.0
1.0 1.0 1.0
"#;
        let lut = parse_3d(Cursor::new(cube)).expect("parse failed");

        assert_eq!(lut.size, 2);
        assert_eq!(lut.name, "Test Grade");
        // Size-2 identity: sampling is exact everywhere.
        let out = lut.apply([0.25, 0.5, 0.75]);
        assert!((out[0] - 0.25).abs() < 1e-5);
        assert!((out[1] - 0.5).abs() < 1e-5);
        assert!((out[2] - 0.75).abs() < 1e-5);
    }

    #[test]
    fn parse_1d_cube() {
        let cube = r#"
TITLE "Gamma 2.2"
LUT_1D_SIZE 3

0.0 0.0 0.0
0.5 0.5 0.5
1.0 1.0 1.0
"#;
        let lut = parse_1d(Cursor::new(cube)).expect("parse failed");

        assert_eq!(lut.size(), 3);
        assert_eq!(lut.name, "Gamma 2.2");
    }

    #[test]
    fn parse_rejects_wrong_row_count() {
        let cube = "LUT_3D_SIZE 2\n0.0 0.0 0.0\n";
        assert!(parse_3d(Cursor::new(cube)).is_err());
    }

    #[test]
    fn parse_rejects_garbage_data() {
        let cube = "LUT_3D_SIZE 2\n0.0 zero 0.0\n";
        assert!(parse_3d(Cursor::new(cube)).is_err());
    }

    #[test]
    fn parse_rejects_missing_size() {
        let cube = "0.0 0.0 0.0\n";
        assert!(parse_3d(Cursor::new(cube)).is_err());
    }

    #[test]
    fn parse_rejects_dimension_mismatch() {
        let cube = "LUT_1D_SIZE 3\n0.0 0.0 0.0\n0.5 0.5 0.5\n1.0 1.0 1.0\n";
        assert!(parse_3d(Cursor::new(cube)).is_err());
    }

    #[test]
    fn roundtrip_3d() {
        let mut lut = Lut3D::identity(4).with_name("roundtrip");
        // Perturb so the test is not symmetric under axis swaps.
        lut.data[5] = [0.21, 0.43, 0.65];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.cube");

        write_3d(&path, &lut).expect("write failed");
        let loaded = read_3d(&path).expect("read failed");

        assert_eq!(loaded.size, 4);
        assert_eq!(loaded.name, "roundtrip");
        for (a, b) in lut.data.iter().zip(&loaded.data) {
            for i in 0..3 {
                assert!((a[i] - b[i]).abs() < 1e-5, "{} vs {}", a[i], b[i]);
            }
        }
    }
}
