//! Writes a rendered buffer out as a binary PPM (P6) file: the header
//! `P6`, width, height and `255`, one per line, followed by three raw
//! bytes per pixel, top row first.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::RenderError;
use crate::render::PixelBuffer;

/// The file name used when none is given.
pub const DEFAULT_OUTPUT: &str = "mandelbrot.ppm";

/// Encode `buffer` as P6 into any writer.
pub fn encode_ppm<W: Write>(mut output: W, buffer: &PixelBuffer) -> Result<(), RenderError> {
    write!(output, "P6\n{}\n{}\n255\n", buffer.width(), buffer.height())?;
    output.write_all(&buffer.to_bytes())?;
    Ok(())
}

/// Create (or truncate) `outfile` and write `buffer` into it.
pub fn write_ppm<P: AsRef<Path>>(outfile: P, buffer: &PixelBuffer) -> Result<(), RenderError> {
    let path = outfile.as_ref();
    let mut output = BufWriter::new(File::create(path)?);
    encode_ppm(&mut output, buffer)?;
    output.flush()?;
    info!(
        "wrote {}x{} image to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}
