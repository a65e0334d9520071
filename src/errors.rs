// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The single error type shared by the frame validator, the threaded
//! renderer, and the PPM writer.

use failure::Fail;
use std::io;

/// Everything that can go wrong between parsing a frame and getting
/// the image onto disk.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The frame has a non-finite bound, or one of its ranges is zero
    /// or negative.
    #[fail(
        display = "Degenerate frame: real {}..{}, imaginary {}..{}",
        real_min, real_max, imag_min, imag_max
    )]
    DegenerateFrame {
        /// Left edge of the frame.
        real_min: f64,
        /// Right edge of the frame.
        real_max: f64,
        /// Bottom edge of the frame.
        imag_min: f64,
        /// Top edge of the frame.
        imag_max: f64,
    },

    /// The requested (or derived) image has no pixels.
    #[fail(display = "Image of {}x{} pixels is empty", width, height)]
    EmptyImage {
        /// Width in pixels.
        width: usize,
        /// Height in pixels.
        height: usize,
    },

    /// The image has more pixels than fit in memory.
    #[fail(display = "Image of {}x{} pixels is too large", width, height)]
    TooLarge {
        /// Width in pixels.
        width: usize,
        /// Height in pixels.
        height: usize,
    },

    /// Asked to render with zero worker threads.
    #[fail(display = "At least one render thread is required")]
    NoThreads,

    /// A render thread panicked before finishing its band.
    #[fail(display = "A render thread panicked")]
    WorkerPanicked,

    /// The output file could not be created or written.
    #[fail(display = "Could not write image: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: RenderError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        match err {
            RenderError::Io(ref e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            _ => panic!("expected an Io error"),
        }
        assert!(format!("{}", err).contains("gone"));
    }

    #[test]
    fn empty_image_names_its_size() {
        let err = RenderError::EmptyImage {
            width: 10,
            height: 0,
        };
        assert_eq!(format!("{}", err), "Image of 10x0 pixels is empty");
    }
}
