// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The rasterizer.  Every pixel is mapped to a point on the complex
//! plane, run through the escape-time test, and painted with the band
//! color for its escape time.
//!
//! Pixels don't depend on one another, so the threaded renderer simply
//! cuts the buffer into bands of whole rows and hands each band to its
//! own scoped thread.  The bands never overlap, so nothing needs a lock,
//! and the result is identical to the single-threaded pass no matter how
//! many threads are used.

use itertools::iproduct;
use num::Complex;

use crate::errors::RenderError;
use crate::escape::escape_time;
use crate::palette::{color_for, Rgb};
use crate::planes::{Frame, ImageSize, Pixel, PlaneMapper};

/// A finished (or in-progress) image: a flat, row-major run of pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    size: ImageSize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    fn blank(size: ImageSize) -> PixelBuffer {
        PixelBuffer {
            size,
            pixels: vec![Rgb::default(); size.len()],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Both dimensions at once.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// All pixels, top row first.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The pixel at column `x`, row `y`, if it is inside the image.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(self.pixels[y * self.size.width + x])
    }

    /// The image as packed RGB bytes, ready for an encoder.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.channels());
        }
        bytes
    }

    /// Give up the buffer.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }
}

/// Holds the plane mapping for one image.  Once built it is never
/// mutated, so it can be shared by reference between render threads.
#[derive(Debug)]
pub struct Renderer {
    plane: PlaneMapper,
}

impl Renderer {
    /// Render `frame` into an image of exactly `size` pixels.
    pub fn new(frame: Frame, size: ImageSize) -> Renderer {
        Renderer {
            plane: PlaneMapper::new(frame, size),
        }
    }

    /// Render `frame` at `width` pixels across, deriving the height
    /// from the frame's aspect ratio.
    pub fn for_width(frame: Frame, width: usize) -> Result<Renderer, RenderError> {
        let size = frame.size_for_width(width)?;
        Ok(Renderer::new(frame, size))
    }

    /// The mapping between pixels and points used by this renderer.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The color of a single pixel.
    #[inline]
    pub fn shade(&self, pixel: &Pixel) -> Rgb {
        color_for(escape_time(self.plane.pixel_to_point(pixel)))
    }

    /// The reference pass: one thread, every pixel in row-major order.
    pub fn render_single(&self) -> PixelBuffer {
        let mut buffer = PixelBuffer::blank(self.plane.size);
        for (row, column) in iproduct!(0..self.plane.size.height, 0..self.plane.size.width) {
            let pixel = Pixel(column, row);
            buffer.pixels[self.plane.pixel_to_offset(&pixel)] = self.shade(&pixel);
        }
        buffer
    }

    /// Fill `band`, a run of whole rows starting at `first_row`.  The
    /// imaginary coordinate is worked out once per row.
    pub fn render_rows(&self, first_row: usize, band: &mut [Rgb]) {
        let width = self.plane.size.width;
        for (i, row) in band.chunks_mut(width).enumerate() {
            let imag = self.plane.row_to_imag(first_row + i);
            for (column, pixel) in row.iter_mut().enumerate() {
                let point = Complex::new(self.plane.column_to_real(column), imag);
                *pixel = color_for(escape_time(point));
            }
        }
    }

    /// A multi-threaded version of the render function.  Each thread
    /// gets one contiguous band of rows.
    pub fn render(&self, threads: usize) -> Result<PixelBuffer, RenderError> {
        if threads == 0 {
            return Err(RenderError::NoThreads);
        }
        let width = self.plane.size.width;
        let height = self.plane.size.height;
        let rows_per_band = (height + threads - 1) / threads;
        debug!(
            "rendering {} rows in bands of {} across {} threads",
            height, rows_per_band, threads
        );

        let mut buffer = PixelBuffer::blank(self.plane.size);
        {
            let bands: Vec<&mut [Rgb]> = buffer.pixels.chunks_mut(rows_per_band * width).collect();
            crossbeam::scope(|spawner| {
                for (i, band) in bands.into_iter().enumerate() {
                    spawner.spawn(move |_| {
                        self.render_rows(i * rows_per_band, band);
                    });
                }
            })
            .map_err(|_| RenderError::WorkerPanicked)?;
        }
        Ok(buffer)
    }
}
