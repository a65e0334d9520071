//! Where the pixels sit on the complex plane.  A validated `Frame`
//! bounds the region to draw, a validated `ImageSize` gives the pixel
//! grid (its height derived from the frame's aspect ratio), and the
//! `PlaneMapper` turns a pixel's column and row into the point it
//! samples.
use num::Complex;

use crate::errors::RenderError;

/// The rectangle of the complex plane to render.  The real part runs
/// along the x axis and the imaginary part along the y axis; row 0 of
/// the image sits at `imag_min`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Left edge.
    pub real_min: f64,
    /// Right edge.
    pub real_max: f64,
    /// Edge rendered as the top row of the image.
    pub imag_min: f64,
    /// Edge just past the bottom row of the image.
    pub imag_max: f64,
}

impl Frame {
    /// Build a frame, refusing anything that would give a zero, negative
    /// or non-finite step.
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Frame, RenderError> {
        let frame = Frame {
            real_min,
            real_max,
            imag_min,
            imag_max,
        };
        let finite = [real_min, real_max, imag_min, imag_max]
            .iter()
            .all(|v| v.is_finite());
        if !finite || real_max <= real_min || imag_max <= imag_min {
            return Err(RenderError::DegenerateFrame {
                real_min,
                real_max,
                imag_min,
                imag_max,
            });
        }
        Ok(frame)
    }

    /// Width of the frame on the real axis.
    pub fn real_range(&self) -> f64 {
        self.real_max - self.real_min
    }

    /// Height of the frame on the imaginary axis.
    pub fn imag_range(&self) -> f64 {
        self.imag_max - self.imag_min
    }

    /// The image size for a given pixel width.  The height keeps the
    /// frame's aspect ratio and is truncated, never rounded.
    pub fn size_for_width(&self, width: usize) -> Result<ImageSize, RenderError> {
        let height = (width as f64 * self.imag_range() / self.real_range()) as usize;
        ImageSize::new(width, height)
    }
}

/// Width and height of the image in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl ImageSize {
    /// Both dimensions must be at least one pixel, and the packed RGB
    /// bytes of the whole image must be addressable.
    pub fn new(width: usize, height: usize) -> Result<ImageSize, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage { width, height });
        }
        if width.checked_mul(height).and_then(|n| n.checked_mul(3)).is_none() {
            return Err(RenderError::TooLarge { width, height });
        }
        Ok(ImageSize { width, height })
    }

    /// The total number of pixels.  Used to size the buffer.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false for a validated size.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Column and row of a pixel, in that order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of the image onto points of the frame.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The pixel grid.
    pub size: ImageSize,
    /// The region of the complex plane it covers.
    pub frame: Frame,
    // The size of one pixel on the complex plane, real then imaginary.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Precompute the per-pixel steps along both axes.
    pub fn new(frame: Frame, size: ImageSize) -> PlaneMapper {
        let steps = (
            frame.real_range() / (size.width as f64),
            frame.imag_range() / (size.height as f64),
        );
        debug!(
            "plane {}x{} over {:?}, steps {:e} / {:e}",
            size.width, size.height, frame, steps.0, steps.1
        );
        PlaneMapper { size, frame, steps }
    }

    /// Distance between neighbouring columns on the real axis.
    pub fn real_step(&self) -> f64 {
        self.steps.0
    }

    /// Distance between neighbouring rows on the imaginary axis.
    pub fn imag_step(&self) -> f64 {
        self.steps.1
    }

    /// The real coordinate of a column.
    #[inline]
    pub fn column_to_real(&self, column: usize) -> f64 {
        self.frame.real_min + (column as f64) * self.steps.0
    }

    /// The imaginary coordinate of a row.  A row that lands within half
    /// a step of the real axis is put exactly on it, so accumulated
    /// rounding can't break the set's symmetry.
    #[inline]
    pub fn row_to_imag(&self, row: usize) -> f64 {
        let imag = self.frame.imag_min + (row as f64) * self.steps.1;
        if imag.abs() < self.steps.1 / 2.0 {
            0.0
        } else {
            imag
        }
    }

    /// The point on the complex plane a pixel samples.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(self.column_to_real(pixel.0), self.row_to_imag(pixel.1))
    }

    /// The linear offset of a pixel in a row-major buffer.
    pub fn pixel_to_offset(&self, pixel: &Pixel) -> usize {
        pixel.1 * self.size.width + pixel.0
    }

    /// The total number of pixels.
    pub fn len(&self) -> usize {
        self.size.len()
    }

    /// Always false for a validated size.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(frame: (f64, f64, f64, f64), width: usize) -> PlaneMapper {
        let frame = Frame::new(frame.0, frame.1, frame.2, frame.3).unwrap();
        let size = frame.size_for_width(width).unwrap();
        PlaneMapper::new(frame, size)
    }

    #[test]
    fn frame_fails_on_bad_shape() {
        assert!(Frame::new(1.0, -1.0, -1.0, 1.0).is_err());
        assert!(Frame::new(-1.0, 1.0, 1.0, -1.0).is_err());
        assert!(Frame::new(0.5, 0.5, -1.0, 1.0).is_err());
        assert!(Frame::new(-1.0, 1.0, -1.0, std::f64::NAN).is_err());
        assert!(Frame::new(std::f64::NEG_INFINITY, 1.0, -1.0, 1.0).is_err());
    }

    #[test]
    fn frame_passes_on_good_shape() {
        assert!(Frame::new(-1.0, 1.0, -1.0, 1.0).is_ok());
    }

    #[test]
    fn height_follows_aspect_ratio() {
        let frame = Frame::new(-2.5, 1.5, -2.0, 2.0).unwrap();
        assert_eq!(frame.size_for_width(100).unwrap(), ImageSize { width: 100, height: 100 });

        let frame = Frame::new(0.0, 4.0, 0.0, 1.0).unwrap();
        assert_eq!(frame.size_for_width(10).unwrap().height, 2);
    }

    #[test]
    fn height_truncates() {
        // 7 * 1/3 = 2.33
        let frame = Frame::new(0.0, 3.0, 0.0, 1.0).unwrap();
        assert_eq!(frame.size_for_width(7).unwrap().height, 2);
    }

    #[test]
    fn sliver_frames_give_empty_images() {
        let frame = Frame::new(0.0, 100.0, 0.0, 1.0).unwrap();
        match frame.size_for_width(10) {
            Err(RenderError::EmptyImage { width, height }) => assert_eq!((width, height), (10, 0)),
            other => panic!("unexpected {:?}", other),
        }
        assert!(ImageSize::new(0, 10).is_err());
    }

    #[test]
    fn oversized_images_are_refused() {
        match ImageSize::new(usize::max_value() / 2, 3) {
            Err(RenderError::TooLarge { width, height }) => {
                assert_eq!((width, height), (usize::max_value() / 2, 3))
            }
            other => panic!("unexpected {:?}", other),
        }
        // Fits as a pixel count, but not as packed RGB bytes.
        assert!(ImageSize::new(usize::max_value() / 2, 1).is_err());
        assert!(ImageSize::new(1 << 10, 1 << 10).is_ok());
    }

    #[test]
    fn huge_widths_are_refused_before_rendering() {
        let frame = Frame::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let width = usize::max_value() / 4;
        match frame.size_for_width(width) {
            Err(RenderError::TooLarge { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn steps_divide_the_frame_evenly() {
        let pm = mapper((-2.0, 2.0, -1.0, 1.0), 8);
        assert_eq!(pm.size, ImageSize { width: 8, height: 4 });
        assert_eq!(pm.real_step(), 0.5);
        assert_eq!(pm.imag_step(), 0.5);
        assert_eq!(pm.column_to_real(3), -2.0 + 3.0 * pm.real_step());
    }

    #[test]
    fn pixel_to_point_on_positive_planes() {
        let pm = mapper((0.0, 5.0, 1.0, 6.0), 5);
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(0.0, 1.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(2.0, 3.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 4)), Complex::new(4.0, 5.0));
    }

    #[test]
    fn pixel_to_points_on_mixed_planes() {
        let pm = mapper((-2.0, 2.0, -2.0, 2.0), 4);
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(3, 1)), Complex::new(1.0, -1.0));
    }

    #[test]
    fn rows_near_the_axis_snap_to_zero() {
        // Eleven steps of 0.2/22 up from -0.1 lands a hair above the axis.
        let pm = mapper((-0.1, 0.1, -0.1, 0.1), 22);
        assert_eq!(pm.size.height, 22);
        let drifted = pm.frame.imag_min + 11.0 * pm.imag_step();
        assert!(drifted != 0.0);
        assert!(drifted.abs() < pm.imag_step() / 2.0);
        assert_eq!(pm.row_to_imag(11), 0.0);
        assert_eq!(pm.pixel_to_point(&Pixel(3, 11)).im, 0.0);
    }

    #[test]
    fn rows_away_from_the_axis_are_left_alone() {
        let pm = mapper((-1.0, 1.0, -1.0, 1.0), 20);
        assert_eq!(pm.row_to_imag(0), -1.0);
        assert!(pm.row_to_imag(11) > 0.05);
        assert!(pm.row_to_imag(9) < -0.05);
    }

    #[test]
    fn offsets_are_row_major() {
        let pm = mapper((-1.0, 1.0, -1.0, 1.0), 10);
        assert_eq!(pm.pixel_to_offset(&Pixel(0, 0)), 0);
        assert_eq!(pm.pixel_to_offset(&Pixel(3, 0)), 3);
        assert_eq!(pm.pixel_to_offset(&Pixel(3, 2)), 23);
        assert_eq!(pm.len(), 100);
    }
}
