//! Adobe/Resolve `.cube` 3D LUT serialization.
//!
//! The export target of the LUT baker: plain text, one `LUT_3D_SIZE`
//! header, `DOMAIN_MIN`/`DOMAIN_MAX` lines, then `n^3` RGB lines with
//! blue as the outer loop and red as the inner (R varies fastest), six
//! decimal digits per component.
//!
//! # Format
//!
//! ```text
//! # comment
//! TITLE "250D 35mm"
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.000000 0.000000 0.000000
//! ...
//! ```

use crate::{Lut3D, LutError, LutResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Writes a 3D LUT to a `.cube` file.
pub fn write_3d<P: AsRef<Path>>(path: P, lut: &Lut3D, title: &str) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serialize_3d(&mut writer, lut, title)
}

/// Serializes a 3D LUT in `.cube` form to any writer.
pub fn serialize_3d<W: Write>(writer: &mut W, lut: &Lut3D, title: &str) -> LutResult<()> {
    writeln!(writer, "# Generated by emulsion-rs")?;
    if !title.is_empty() {
        writeln!(writer, "TITLE \"{}\"", title)?;
    }
    writeln!(writer, "LUT_3D_SIZE {}", lut.size)?;
    let min = lut.domain_min;
    let max = lut.domain_max;
    writeln!(writer, "DOMAIN_MIN {} {} {}", min[0], min[1], min[2])?;
    writeln!(writer, "DOMAIN_MAX {} {} {}", max[0], max[1], max[2])?;
    writeln!(writer)?;

    // Data is stored R-fastest, which is exactly the file order.
    for rgb in &lut.data {
        writeln!(writer, "{:.6} {:.6} {:.6}", rgb[0], rgb[1], rgb[2])?;
    }
    Ok(())
}

/// Reads a 3D LUT from a `.cube` file.
pub fn read_3d<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let file = File::open(path.as_ref())?;
    parse_3d(BufReader::new(file))
}

/// Parses a 3D LUT from a reader.
pub fn parse_3d<R: BufRead>(reader: R) -> LutResult<Lut3D> {
    let mut size: Option<usize> = None;
    let mut domain_min = [0.0_f32; 3];
    let mut domain_max = [1.0_f32; 3];
    let mut data: Vec<[f32; 3]> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with("TITLE") {
            continue;
        }

        if let Some(rest) = line.strip_prefix("LUT_3D_SIZE") {
            size = Some(
                rest.trim()
                    .parse()
                    .map_err(|_| LutError::ParseError("invalid LUT_3D_SIZE".into()))?,
            );
        } else if line.starts_with("LUT_1D_SIZE") {
            return Err(LutError::ParseError("expected 3D LUT, found 1D".into()));
        } else if let Some(rest) = line.strip_prefix("DOMAIN_MIN") {
            domain_min = parse_triple(rest)?;
        } else if let Some(rest) = line.strip_prefix("DOMAIN_MAX") {
            domain_max = parse_triple(rest)?;
        } else {
            data.push(parse_triple(line)?);
        }
    }

    let size = size.ok_or_else(|| LutError::ParseError("missing LUT_3D_SIZE".into()))?;
    if data.len() != size * size * size {
        return Err(LutError::ParseError(format!(
            "expected {} entries, found {}",
            size * size * size,
            data.len()
        )));
    }

    Ok(Lut3D::from_data(data, size)?.with_domain(domain_min, domain_max))
}

fn parse_triple(s: &str) -> LutResult<[f32; 3]> {
    let mut parts = s.split_whitespace();
    let mut out = [0.0f32; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        let token = parts
            .next()
            .ok_or_else(|| LutError::ParseError(format!("expected 3 values: {}", s)))?;
        *slot = token
            .parse()
            .map_err(|_| LutError::ParseError(format!("invalid value {} in: {}", i, s)))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::io::Cursor;

    #[test]
    fn serialize_then_parse_is_identity() {
        // Size 4 steps by 1/3, which the 6-decimal text form truncates;
        // compare within that quantization instead of bit-exactly.
        let lut = Lut3D::identity(4);
        let mut buf = Vec::new();
        serialize_3d(&mut buf, &lut, "test").unwrap();

        let parsed = parse_3d(Cursor::new(buf)).unwrap();
        assert_eq!(parsed.size, 4);
        for (got, want) in parsed.data.iter().zip(&lut.data) {
            for c in 0..3 {
                assert_abs_diff_eq!(got[c], want[c], epsilon = 5e-7);
            }
        }
    }

    #[test]
    fn header_declares_size_and_domain() {
        let lut = Lut3D::identity(2);
        let mut buf = Vec::new();
        serialize_3d(&mut buf, &lut, "t").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("LUT_3D_SIZE 2"));
        assert!(text.contains("DOMAIN_MIN 0 0 0"));
        assert!(text.contains("DOMAIN_MAX 1 1 1"));
    }

    #[test]
    fn first_axis_to_vary_is_red() {
        let lut = Lut3D::identity(2);
        let mut buf = Vec::new();
        serialize_3d(&mut buf, &lut, "").unwrap();
        let text = String::from_utf8(buf).unwrap();
        let data_lines: Vec<&str> = text
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.chars().next().unwrap().is_ascii_alphabetic())
            .collect();
        assert_eq!(data_lines[0], "0.000000 0.000000 0.000000");
        assert_eq!(data_lines[1], "1.000000 0.000000 0.000000");
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("identity.cube");
        let lut = Lut3D::identity(3);
        write_3d(&path, &lut, "roundtrip").unwrap();
        let loaded = read_3d(&path).unwrap();
        assert_eq!(loaded.size, 3);
        assert_eq!(loaded.data, lut.data);
    }

    #[test]
    fn wrong_entry_count_fails() {
        let text = "LUT_3D_SIZE 2\n0 0 0\n1 1 1\n";
        assert!(parse_3d(Cursor::new(text)).is_err());
    }
}
