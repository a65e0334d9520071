//! The fixed color table.  Iteration counts below the limit wrap around
//! the table to produce the familiar concentric bands; points that never
//! escape get the last entry, which is reserved for the inside of the set.

use crate::escape::MAX_ITERATIONS;

/// A single 8-bit RGB pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Build a pixel from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Rgb {
        Rgb { red, green, blue }
    }

    /// The channels in file order.
    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Number of entries in the palette.
pub const PALETTE_SIZE: usize = 17;

/// Index of the color used for points that did not escape.
pub const INSIDE: usize = PALETTE_SIZE - 1;

/// Browns through blues through golds, ending in the near-black used
/// for the set itself.
pub static PALETTE: [Rgb; PALETTE_SIZE] = [
    Rgb::new(66, 30, 15),
    Rgb::new(25, 7, 26),
    Rgb::new(9, 1, 47),
    Rgb::new(4, 4, 73),
    Rgb::new(0, 7, 100),
    Rgb::new(12, 44, 138),
    Rgb::new(24, 82, 177),
    Rgb::new(57, 125, 209),
    Rgb::new(134, 181, 229),
    Rgb::new(211, 236, 248),
    Rgb::new(241, 233, 191),
    Rgb::new(248, 201, 95),
    Rgb::new(255, 170, 0),
    Rgb::new(204, 128, 0),
    Rgb::new(153, 87, 0),
    Rgb::new(106, 52, 3),
    Rgb::new(16, 16, 16),
];

/// Map an escape time to its band color.
#[inline]
pub fn color_for(iterations: usize) -> Rgb {
    if iterations >= MAX_ITERATIONS {
        return PALETTE[INSIDE];
    }
    PALETTE[iterations % PALETTE_SIZE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_color_is_reserved() {
        assert_eq!(color_for(MAX_ITERATIONS), Rgb::new(16, 16, 16));
        // By the modulo rule 200 would have landed on entry 13.
        assert_ne!(color_for(MAX_ITERATIONS), PALETTE[MAX_ITERATIONS % PALETTE_SIZE]);
    }

    #[test]
    fn bands_wrap_around_the_table() {
        assert_eq!(color_for(0), PALETTE[0]);
        assert_eq!(color_for(5), PALETTE[5]);
        assert_eq!(color_for(16), PALETTE[16]);
        assert_eq!(color_for(17), PALETTE[0]);
        assert_eq!(color_for(35), PALETTE[1]);
        assert_eq!(color_for(MAX_ITERATIONS - 1), PALETTE[(MAX_ITERATIONS - 1) % PALETTE_SIZE]);
    }

    #[test]
    fn channels_are_in_file_order() {
        assert_eq!(Rgb::new(1, 2, 3).channels(), [1, 2, 3]);
    }
}
