//! The escape-time test at the heart of every Mandelbrot renderer.
//!
//! A point `c` on the complex plane belongs to the Mandelbrot set if
//! repeatedly squaring and adding `c` never carries it further than 2.0
//! from the origin.  We can't iterate forever, so we give up after a
//! fixed number of steps and report how long the point survived.

use num::Complex;

/// The number of iterations after which a point is assumed to be inside
/// the set.
pub const MAX_ITERATIONS: usize = 200;

/// Once an orbit gets further than this from the origin it never comes
/// back.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Returns the iteration at which the orbit of `z0` first leaves the
/// escape radius, or `MAX_ITERATIONS` if it never does.
#[inline]
pub fn escape_time(z0: Complex<f64>) -> usize {
    escape_time_with_limit(z0, MAX_ITERATIONS)
}

/// The orbit starts at `z0` itself, not at the origin, and the
/// magnitude is tested after each step.  `norm()` is a hypotenuse, so
/// squaring large components can't overflow before the comparison.  A
/// point that is already far outside still takes one step, and escapes
/// at 0.
pub fn escape_time_with_limit(z0: Complex<f64>, limit: usize) -> usize {
    let mut z = z0;
    for t in 0..limit {
        z = z * z + z0;
        if z.norm() > ESCAPE_RADIUS {
            return t;
        }
    }
    limit
}
