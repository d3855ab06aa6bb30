use image::DynamicImage;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::MemInitError;

/// Default number of hex digits per pixel.
pub const DEFAULT_DIGITS: usize = 3;

const OUTPUT_EXTENSION: &str = "vh";

/// Converter from a grayscale image to a Verilog memory-init hex table.
///
/// The generated file holds a three-line `//` comment header followed by one
/// line per image row; every pixel becomes a zero-padded lowercase hex token
/// of exactly [`digits`](Self::with_digits) digits followed by a single
/// space, so each line carries a trailing space.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HexTable {
    path: PathBuf,
    digits: usize,
}

impl HexTable {
    /// Creates a converter for the image at `path` with [`DEFAULT_DIGITS`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            digits: DEFAULT_DIGITS,
        }
    }

    /// Sets the number of hex digits per pixel.
    ///
    /// A value too narrow for some pixel does not truncate that pixel; the
    /// width only controls zero padding.
    #[must_use]
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    /// Output path derived from the input path, with the extension replaced
    /// by `vh`.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.path.with_extension(OUTPUT_EXTENSION)
    }

    // Raw integer pixel values in row-major order. 8-bit images keep their
    // 0-255 values, they are not rescaled to the 16-bit range.
    fn read_rows(&self) -> Result<Vec<Vec<u16>>, MemInitError> {
        let rows = match image::open(&self.path)? {
            DynamicImage::ImageLuma8(img) => img
                .rows()
                .map(|row| row.map(|px| u16::from(px.0[0])).collect())
                .collect(),
            DynamicImage::ImageLuma16(img) => img
                .rows()
                .map(|row| row.map(|px| px.0[0]).collect())
                .collect(),
            img => return Err(MemInitError::UnsupportedColor(img.color())),
        };
        Ok(rows)
    }

    /// Converts the image and writes the table to `out`.
    ///
    /// The image is decoded before `out` is created, so a decode failure
    /// never leaves a truncated output file behind.
    pub fn write_to(&self, out: impl AsRef<Path>) -> Result<(), MemInitError> {
        let rows = self.read_rows()?;
        tracing::debug!(
            "writing {}x{} hex table to {}",
            rows.first().map_or(0, Vec::len),
            rows.len(),
            out.as_ref().display()
        );

        let mut w = BufWriter::new(File::create(out)?);
        writeln!(w, "//")?;
        writeln!(w, "// autogenerated from {}", self.path.display())?;
        writeln!(w, "//")?;
        for row in &rows {
            for px in row {
                write!(w, "{:0width$x} ", px, width = self.digits)?;
            }
            writeln!(w)?;
        }
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_gray8(
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
        data: Vec<u8>,
    ) -> anyhow::Result<()> {
        image::GrayImage::from_raw(width, height, data)
            .ok_or_else(|| anyhow::anyhow!("pixel count does not match dimensions"))?
            .save(path)?;
        Ok(())
    }

    #[test]
    fn test_two_by_two() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("tmp.tiff");
        create_gray8(&input, 2, 2, vec![0x00, 0xFF, 0x10, 0x01])?;

        let out = dir.path().join("tmp.vh");
        HexTable::new(&input).with_digits(2).write_to(&out)?;

        let text = std::fs::read_to_string(&out)?;
        let source_line = format!("// autogenerated from {}", input.display());
        let mut lines = text.lines();
        assert_eq!(Some("//"), lines.next());
        assert_eq!(Some(source_line.as_str()), lines.next());
        assert_eq!(Some("//"), lines.next());
        assert_eq!(Some("00 ff "), lines.next());
        assert_eq!(Some("10 01 "), lines.next());
        assert_eq!(None, lines.next());
        Ok(())
    }

    #[test]
    fn test_default_digits() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("tmp.tiff");
        create_gray8(&input, 1, 1, vec![0x01])?;

        let out = dir.path().join("tmp.vh");
        HexTable::new(&input).write_to(&out)?;

        let text = std::fs::read_to_string(&out)?;
        assert_eq!(Some("001 "), text.lines().nth(3));
        Ok(())
    }

    #[rstest::rstest]
    #[case::padded("0ff ", 3)]
    #[case::exact("ff ", 2)]
    #[case::never_truncates("ff ", 1)]
    fn test_digit_width(#[case] expect: &str, #[case] digits: usize) -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("tmp.tiff");
        create_gray8(&input, 1, 1, vec![0xFF])?;

        let out = dir.path().join("tmp.vh");
        HexTable::new(&input).with_digits(digits).write_to(&out)?;

        let text = std::fs::read_to_string(&out)?;
        assert_eq!(Some(expect), text.lines().nth(3));
        Ok(())
    }

    #[test]
    fn test_gray16_keeps_raw_values() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("tmp.tiff");
        image::ImageBuffer::<image::Luma<u16>, _>::from_raw(2, 1, vec![0x0ABCu16, 0x0001])
            .ok_or_else(|| anyhow::anyhow!("pixel count does not match dimensions"))?
            .save(&input)?;

        let out = dir.path().join("tmp.vh");
        HexTable::new(&input).write_to(&out)?;

        let text = std::fs::read_to_string(&out)?;
        assert_eq!(Some("abc 001 "), text.lines().nth(3));
        Ok(())
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            PathBuf::from("frames/hor-pairs.vh"),
            HexTable::new("frames/hor-pairs.tiff").output_path()
        );
    }

    #[test]
    fn test_missing_input_creates_no_output() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("tmp.vh");
        let result = HexTable::new(dir.path().join("no_such.tiff")).write_to(&out);
        assert!(matches!(result, Err(MemInitError::Image(_))));
        assert!(!out.exists());
        Ok(())
    }

    #[test]
    fn test_corrupt_input() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("tmp.tiff");
        std::fs::write(&input, b"not a tiff")?;
        let out = dir.path().join("tmp.vh");
        let result = HexTable::new(&input).write_to(&out);
        assert!(matches!(result, Err(MemInitError::Image(_))));
        assert!(!out.exists());
        Ok(())
    }

    #[test]
    fn test_rejects_color_input() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("tmp.tiff");
        image::RgbImage::from_raw(1, 1, vec![1, 2, 3])
            .ok_or_else(|| anyhow::anyhow!("pixel count does not match dimensions"))?
            .save(&input)?;

        let result = HexTable::new(&input).write_to(dir.path().join("tmp.vh"));
        assert!(matches!(
            result,
            Err(MemInitError::UnsupportedColor(image::ColorType::Rgb8))
        ));
        Ok(())
    }
}
