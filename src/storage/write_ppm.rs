use std::io::Write;

/// Writes a binary PPM image.
///
/// `rgb` is one byte triple per pixel, row-major from the top-left, and
/// must hold exactly `width * height * 3` bytes.
pub fn write_ppm<W: Write>(out: &mut W, width: u32, height: u32, rgb: &[u8]) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", width, height)?;
    writeln!(out, "255")?;
    out.write_all(rgb)?;

    Ok(())
}
