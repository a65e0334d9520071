#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring a number and adding `c` back never
//! sends it off to infinity.  Points outside the set do eventually
//! escape, and how many steps they take to do so is the "escape time"
//! used to color the image.  Points that never escape within the
//! iteration limit are painted a single near-black color.
//!
//! The pieces, from the bottom up: `escape` runs the iteration for one
//! point, `palette` turns an escape time into a color, `planes` maps
//! pixels onto the complex plane, `render` fills a whole buffer (on
//! one thread or many), and `output` writes that buffer out as a PPM.

extern crate crossbeam;
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod errors;
pub mod escape;
pub mod output;
pub mod palette;
pub mod planes;
pub mod presets;
pub mod render;

pub use errors::RenderError;
pub use escape::{escape_time, MAX_ITERATIONS};
pub use output::write_ppm;
pub use palette::{color_for, Rgb, PALETTE};
pub use planes::{Frame, ImageSize};
pub use presets::Preset;
pub use render::{PixelBuffer, Renderer};
